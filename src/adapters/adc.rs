//! ADC1 oneshot input adapter.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the configured ADC1 channel via the oneshot API
//! (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` per channel for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::ports::AnalogInput;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
#[allow(clippy::declare_interior_mutable_const)]
const SIM_ZERO: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_ADC1: [AtomicU16; crate::pins::ADC1_CHANNEL_COUNT] =
    [SIM_ZERO; crate::pins::ADC1_CHANNEL_COUNT];

/// Inject the raw value the next simulated read of `channel` returns.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc1(channel: u32, raw: u16) {
    if let Some(slot) = SIM_ADC1.get(channel as usize) {
        slot.store(raw.min(crate::pins::ADC_MAX_RAW), Ordering::Relaxed);
    }
}

/// One ADC1 channel bound to a GPIO.
#[derive(Debug)]
pub struct Adc1Input {
    gpio: i32,
    channel: u32,
}

impl Adc1Input {
    pub fn new(gpio: i32, channel: u32) -> Self {
        Self { gpio, channel }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }
}

impl AnalogInput for Adc1Input {
    fn pin(&self) -> i32 {
        self.gpio
    }

    #[cfg(target_os = "espidf")]
    fn read_raw(&mut self) -> u16 {
        hw_init::adc1_read(self.channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&mut self) -> u16 {
        SIM_ADC1
            .get(self.channel as usize)
            .map_or(0, |slot| slot.load(Ordering::Relaxed))
    }
}
