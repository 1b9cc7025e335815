//! Unified error types for the Heartbeat prop firmware.
//!
//! A single `Error` enum that every component converts into, so the driver
//! loop handles failures uniformly.  All variants are `Copy` so they can be
//! passed through events without allocation.
//!
//! Out-of-range setter input is *not* an error anywhere in this crate: colour,
//! pulse period and heat level are clamped silently.  Only programmer errors
//! (bad configuration, use before `configure`) surface here.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration was rejected at setup time.
    Config(ConfigError),
    /// An operation that needs bound hardware ran before `configure`.
    Unconfigured(Component),
    /// An actuator write failed.
    Actuator(ActuatorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Unconfigured(c) => write!(f, "{c} used before configure"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// The three peripheral-owning components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    PressureSensor,
    Led,
    Heater,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PressureSensor => write!(f, "pressure sensor"),
            Self::Led => write!(f, "LED controller"),
            Self::Heater => write!(f, "heat controller"),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_raw == max_raw` (or a bound is not finite): normalisation would
    /// divide by zero.
    DegenerateCalibration,
    /// Two actuators were assigned the same LEDC channel.
    ChannelCollision(u32),
    /// Two outputs were assigned the same GPIO.
    PinCollision(i32),
    /// Only 8-bit duty resolution is supported.
    UnsupportedResolution(u32),
    /// A field failed range validation.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateCalibration => write!(f, "calibration bounds must differ"),
            Self::ChannelCollision(ch) => write!(f, "LEDC channel {ch} assigned twice"),
            Self::PinCollision(pin) => write!(f, "GPIO {pin} assigned twice"),
            Self::UnsupportedResolution(bits) => {
                write!(f, "unsupported PWM resolution: {bits} bits")
            }
            Self::Invalid(msg) => write!(f, "invalid: {msg}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
