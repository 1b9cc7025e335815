//! Sensor subsystem.
//!
//! The prop has a single analog sensor, the pressure pad.  Its driver is
//! generic over [`AnalogInput`](crate::app::ports::AnalogInput) so it runs
//! unchanged against the ESP32 ADC and against scripted test inputs.

pub mod pressure;

pub use pressure::{Calibration, PressureSensor, SMOOTHING_WINDOW};
