//! LEDC PWM channel adapter.
//!
//! Implements [`embedded_hal::pwm::SetDutyCycle`] for one 8-bit LEDC
//! channel so the LED and heat drivers stay HAL-agnostic.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the duty register via hw_init.
//! On host/test: records the last duty per channel in static atomics.

use core::convert::Infallible;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use embedded_hal::pwm::{ErrorType, SetDutyCycle};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::pins;

#[cfg(not(target_os = "espidf"))]
#[allow(clippy::declare_interior_mutable_const)]
const SIM_ZERO: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_LEDC: [AtomicU16; pins::LEDC_CHANNEL_COUNT] = [SIM_ZERO; pins::LEDC_CHANNEL_COUNT];

/// Last duty written to `channel` in simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_duty(channel: u32) -> u16 {
    SIM_LEDC
        .get(channel as usize)
        .map_or(0, |slot| slot.load(Ordering::Relaxed))
}

/// One low-speed LEDC channel running at [`pins::PWM_RESOLUTION_BITS`].
#[derive(Debug)]
pub struct LedcPwm {
    channel: u32,
}

impl LedcPwm {
    /// Wrap an LEDC channel already configured by `hw_init`.
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }
}

impl ErrorType for LedcPwm {
    type Error = Infallible;
}

impl SetDutyCycle for LedcPwm {
    fn max_duty_cycle(&self) -> u16 {
        u16::from(pins::PWM_MAX_DUTY)
    }

    #[cfg(target_os = "espidf")]
    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        hw_init::ledc_set(self.channel, u32::from(duty.min(self.max_duty_cycle())));
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if let Some(slot) = SIM_LEDC.get(self.channel as usize) {
            slot.store(duty.min(self.max_duty_cycle()), Ordering::Relaxed);
        }
        Ok(())
    }
}
