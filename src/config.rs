//! Hardware and timing configuration
//!
//! Everything the glue layer hands to the core: pin numbers, LEDC channel
//! numbers, sensor calibration, PWM parameters and poll cadences.  Loading it
//! from storage is the caller's business; JSON is the interchange format.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;
use crate::sensors::pressure::Calibration;

/// Core prop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropConfig {
    // --- Pressure sensor ---
    /// ADC-capable GPIO of the pressure pad
    pub pressure_gpio: i32,
    /// ADC1 channel number matching `pressure_gpio`
    pub pressure_adc_channel: u32,
    /// Raw ADC reading mapped to 0.0
    pub pressure_min_raw: f32,
    /// Raw ADC reading mapped to 1.0
    pub pressure_max_raw: f32,

    // --- RGB LED ---
    /// GPIOs for the red, green and blue channels
    pub led_gpios: [i32; 3],
    /// LEDC channels for red, green and blue
    pub led_channels: [u32; 3],
    /// Pulse half-cycle (milliseconds)
    pub pulse_period_ms: u32,

    // --- Heater ---
    pub heat_gpio: i32,
    pub heat_channel: u32,

    // --- PWM ---
    /// Carrier frequency shared by every actuator (Hz)
    pub pwm_freq_hz: u32,
    /// Duty resolution (bits)
    pub pwm_resolution_bits: u32,

    // --- Timing ---
    /// Pressure sample interval (milliseconds)
    pub sample_interval_ms: u32,
    /// Actuator update interval (milliseconds)
    pub update_interval_ms: u32,
}

impl Default for PropConfig {
    fn default() -> Self {
        Self {
            // Pressure
            pressure_gpio: pins::PRESSURE_ADC_GPIO,
            pressure_adc_channel: pins::PRESSURE_ADC1_CHANNEL,
            pressure_min_raw: 0.0,
            pressure_max_raw: f32::from(pins::ADC_MAX_RAW),

            // LED
            led_gpios: [pins::LED_R_GPIO, pins::LED_G_GPIO, pins::LED_B_GPIO],
            led_channels: [pins::LEDC_CH_LED_R, pins::LEDC_CH_LED_G, pins::LEDC_CH_LED_B],
            pulse_period_ms: 1000,

            // Heater
            heat_gpio: pins::HEAT_GPIO,
            heat_channel: pins::LEDC_CH_HEAT,

            // PWM
            pwm_freq_hz: pins::PWM_FREQ_HZ,
            pwm_resolution_bits: pins::PWM_RESOLUTION_BITS,

            // Timing
            sample_interval_ms: 50, // 20 Hz
            update_interval_ms: 20, // 50 Hz, well under the pulse period
        }
    }
}

impl PropConfig {
    /// Sensor calibration described by this config.
    pub fn calibration(&self) -> Calibration {
        Calibration {
            min_raw: self.pressure_min_raw,
            max_raw: self.pressure_max_raw,
        }
    }

    /// Reject configurations the hardware cannot honour.
    ///
    /// The four actuator LEDC channels and their GPIOs must be pairwise
    /// distinct; components never check this themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calibration().validate()?;

        if self.pwm_resolution_bits != pins::PWM_RESOLUTION_BITS {
            return Err(ConfigError::UnsupportedResolution(self.pwm_resolution_bits));
        }
        if self.pwm_freq_hz == 0 {
            return Err(ConfigError::Invalid("pwm_freq_hz must be non-zero"));
        }
        if self.sample_interval_ms == 0 || self.update_interval_ms == 0 {
            return Err(ConfigError::Invalid("poll intervals must be non-zero"));
        }
        if self.pressure_adc_channel as usize >= pins::ADC1_CHANNEL_COUNT {
            return Err(ConfigError::Invalid("ADC1 channel out of range"));
        }

        let channels = [
            self.led_channels[0],
            self.led_channels[1],
            self.led_channels[2],
            self.heat_channel,
        ];
        if channels
            .iter()
            .any(|&ch| ch as usize >= pins::LEDC_CHANNEL_COUNT)
        {
            return Err(ConfigError::Invalid("LEDC channel out of range"));
        }
        if let Some(ch) = first_duplicate(&channels) {
            return Err(ConfigError::ChannelCollision(ch));
        }

        let outputs = [
            self.led_gpios[0],
            self.led_gpios[1],
            self.led_gpios[2],
            self.heat_gpio,
            self.pressure_gpio,
        ];
        if let Some(pin) = first_duplicate(&outputs) {
            return Err(ConfigError::PinCollision(pin));
        }

        Ok(())
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)
            .map_err(|_| ConfigError::Invalid("malformed config JSON"))?;
        config.validate()?;
        Ok(config)
    }
}

fn first_duplicate<T: Copy + PartialEq>(items: &[T]) -> Option<T> {
    items
        .iter()
        .enumerate()
        .find(|&(i, a)| items[..i].contains(a))
        .map(|(_, a)| *a)
}
