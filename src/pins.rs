//! GPIO / peripheral pin assignments for the Heartbeat prop board.
//!
//! Default values only.  Components never read these directly; they are
//! copied into [`PropConfig`](crate::config::PropConfig) and the channels
//! built from it are handed to each component's `configure`.

// ---------------------------------------------------------------------------
// Pressure sensor (ADC1)
// ---------------------------------------------------------------------------

/// Force-sensitive pressure pad, analog voltage via divider.
/// ADC1 channel 0 (GPIO 36 / SENSOR_VP on ESP32).
pub const PRESSURE_ADC_GPIO: i32 = 36;
/// ADC1 channel for the pressure pad.
pub const PRESSURE_ADC1_CHANNEL: u32 = 0;
/// ADC1 exposes channels 0-9.
pub const ADC1_CHANNEL_COUNT: usize = 10;

/// Full-scale raw reading of the 12-bit ADC.
pub const ADC_MAX_RAW: u16 = 4095;
/// ADC sample width in bits.
pub const ADC_RESOLUTION_BITS: u32 = 12;

// ---------------------------------------------------------------------------
// RGB LED (discrete, common cathode)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 25;
pub const LED_G_GPIO: i32 = 26;
pub const LED_B_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Heating element (MOSFET low-side switch)
// ---------------------------------------------------------------------------

pub const HEAT_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// LEDC channel allocation
// ---------------------------------------------------------------------------

pub const LEDC_CH_LED_R: u32 = 0;
pub const LEDC_CH_LED_G: u32 = 1;
pub const LEDC_CH_LED_B: u32 = 2;
/// Channels 0-2 belong to the LED.
pub const LEDC_CH_HEAT: u32 = 3;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC carrier frequency shared by the LED and the heater (5 kHz).
pub const PWM_FREQ_HZ: u32 = 5_000;
/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// Largest duty value at [`PWM_RESOLUTION_BITS`].
pub const PWM_MAX_DUTY: u8 = u8::MAX;

/// Low-speed LEDC channels available on the ESP32.
pub const LEDC_CHANNEL_COUNT: usize = 8;
