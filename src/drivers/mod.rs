//! Actuator drivers and hardware initialisation.

pub mod heat;
pub mod hw_init;
pub mod led;

pub use heat::HeatController;
pub use led::{LedController, PulsePhase, Rgb};
