//! Heating element driver.
//!
//! One LEDC PWM channel switches a MOSFET in series with the resistive
//! element.  Intensity is a level in `[0.0, 1.0]` mapped onto the 8-bit duty
//! range.  No thermal feedback: the driver is a dumb actuator.

use embedded_hal::pwm::SetDutyCycle;
use log::info;

use crate::app::ports::write_duty;
use crate::error::{Component, Error, Result};

pub struct HeatController<P> {
    channel: Option<P>,
    level: f32,
    duty: u8,
}

impl<P: SetDutyCycle> HeatController<P> {
    pub fn new() -> Self {
        Self {
            channel: None,
            level: 0.0,
            duty: 0,
        }
    }

    /// Bind the PWM channel, reset the level to 0.0 and write it immediately.
    pub fn configure(&mut self, mut channel: P) -> Result<()> {
        write_duty(&mut channel, 0)?;
        self.channel = Some(channel);
        self.level = 0.0;
        self.duty = 0;
        info!("heat: configured, output off");
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.channel.is_some()
    }

    /// Store the intensity clamped to `[0.0, 1.0]`; NaN counts as off.
    /// Takes effect on the next [`update`](Self::update).
    pub fn set_level(&mut self, level: f32) {
        self.level = if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        };
    }

    /// Write `round(level * 255)` to the channel and return it.
    pub fn update(&mut self) -> Result<u8> {
        let Some(channel) = self.channel.as_mut() else {
            return Err(Error::Unconfigured(Component::Heater));
        };
        let duty = level_to_duty(self.level);
        write_duty(channel, duty)?;
        self.duty = duty;
        Ok(duty)
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Duty written by the last update.
    pub fn duty(&self) -> u8 {
        self.duty
    }
}

impl<P: SetDutyCycle> Default for HeatController<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn level_to_duty(level: f32) -> u8 {
    (level * f32::from(u8::MAX)).round() as u8
}
