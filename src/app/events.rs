//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to serial, forward the pressure
//! level to the backend, etc.

use super::commands::AppCommand;
use crate::error::Error;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The service has started polling.
    Started,

    /// A fresh pressure sample.
    Pressure(PressureSample),

    /// An external command was applied to the actuator targets.
    CommandApplied(AppCommand),

    /// An actuator update failed; the loop keeps running.
    ActuatorFault(Error),
}

/// A point-in-time pressure reading suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureSample {
    /// Monotonic timestamp of the read.
    pub at_ms: u64,
    /// Normalised level in [0, 1].
    pub level: f32,
    /// Smoothed raw ADC value behind `level`.
    pub raw: f32,
}
