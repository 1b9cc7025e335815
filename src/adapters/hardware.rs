//! Hardware adapter: bridges the three components to domain port traits.
//!
//! Owns the [`PressureSensor`], [`LedController`] and [`HeatController`],
//! exposing them through [`SensorPort`] and [`ActuatorPort`].  Generic over
//! the analog input and PWM channel types so the same adapter runs on the
//! ESP32 ([`EspHardware`]) and against test doubles.

use embedded_hal::pwm::SetDutyCycle;
use log::info;

use crate::adapters::adc::Adc1Input;
use crate::adapters::pwm::LedcPwm;
use crate::app::ports::{ActuatorPort, AnalogInput, SensorPort};
use crate::config::PropConfig;
use crate::drivers::{HeatController, LedController};
use crate::error::Result;
use crate::sensors::PressureSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<A, P> {
    pressure: PressureSensor<A>,
    led: LedController<P>,
    heat: HeatController<P>,
}

/// The adapter wired to real ESP32 peripherals.
pub type EspHardware = HardwareAdapter<Adc1Input, LedcPwm>;

impl<A: AnalogInput, P: SetDutyCycle> HardwareAdapter<A, P> {
    /// All three components constructed but unbound.
    pub fn new() -> Self {
        Self {
            pressure: PressureSensor::new(),
            led: LedController::new(),
            heat: HeatController::new(),
        }
    }

    /// Validate `config`, then bind every component to its peripheral.
    ///
    /// All-or-nothing: the actuators are blanked on fresh controllers and
    /// nothing is committed unless every step succeeds.  A successful call
    /// replaces the previous actuator state; the pressure smoothing window is
    /// kept.
    pub fn configure(
        &mut self,
        config: &PropConfig,
        pressure_in: A,
        led_rgb: [P; 3],
        heat_out: P,
    ) -> Result<()> {
        config.validate()?;

        let [r, g, b] = led_rgb;
        let mut led = LedController::new();
        led.configure(r, g, b)?;
        led.set_pulse_rate(config.pulse_period_ms);

        let mut heat = HeatController::new();
        heat.configure(heat_out)?;

        self.pressure.configure(pressure_in, config.calibration())?;
        self.led = led;
        self.heat = heat;
        info!("hardware: all components configured");
        Ok(())
    }

    pub fn pressure(&self) -> &PressureSensor<A> {
        &self.pressure
    }

    pub fn led(&self) -> &LedController<P> {
        &self.led
    }

    pub fn heat(&self) -> &HeatController<P> {
        &self.heat
    }
}

impl<A: AnalogInput, P: SetDutyCycle> Default for HardwareAdapter<A, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl EspHardware {
    /// Build channel handles from `config` and configure everything.
    ///
    /// `hw_init::init_peripherals` must have run with the same config.
    pub fn from_config(config: &PropConfig) -> Result<Self> {
        let mut hw = Self::new();
        hw.configure(
            config,
            Adc1Input::new(config.pressure_gpio, config.pressure_adc_channel),
            config.led_channels.map(LedcPwm::new),
            LedcPwm::new(config.heat_channel),
        )?;
        Ok(hw)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<A: AnalogInput, P> SensorPort for HardwareAdapter<A, P> {
    fn read_pressure(&mut self) -> f32 {
        self.pressure.read()
    }

    fn last_pressure_raw(&self) -> f32 {
        self.pressure.last_raw()
    }

    fn last_pressure(&self) -> f32 {
        self.pressure.last_reading()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<A, P: SetDutyCycle> ActuatorPort for HardwareAdapter<A, P> {
    fn set_color(&mut self, r: i32, g: i32, b: i32) {
        self.led.set_color(r, g, b);
    }

    fn set_pulse_rate(&mut self, period_ms: u32) {
        self.led.set_pulse_rate(period_ms);
    }

    fn set_heat_level(&mut self, level: f32) {
        self.heat.set_level(level);
    }

    /// Both actuators are written even if the first fails; the first error
    /// is returned.
    fn update_actuators(&mut self, now_ms: u64) -> Result<()> {
        let led = self.led.update(now_ms).map(|_| ());
        let heat = self.heat.update().map(|_| ());
        led.and(heat)
    }
}
