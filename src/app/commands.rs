//! Inbound commands to the application service.
//!
//! These arrive from the outside world (the WebSocket uplink in the full
//! product) as JSON objects tagged by `"type"`:
//!
//! ```json
//! {"type": "set_color", "r": 255, "g": 40, "b": 0}
//! {"type": "set_pulse_rate", "period_ms": 600}
//! {"type": "set_heat_level", "level": 0.4}
//! ```
//!
//! Values are never range-checked here; the actuator setters clamp them.
//! Integer fields accept any JSON number and saturate into their type, so
//! `5000000000`, `-1e12` and `128.0` all decode.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppCommand {
    /// Change the LED target colour.
    SetColor {
        #[serde(deserialize_with = "saturating_i32")]
        r: i32,
        #[serde(deserialize_with = "saturating_i32")]
        g: i32,
        #[serde(deserialize_with = "saturating_i32")]
        b: i32,
    },

    /// Change the LED pulse half-cycle.  Negative values clamp to 0.
    SetPulseRate {
        #[serde(deserialize_with = "saturating_i64")]
        period_ms: i64,
    },

    /// Change the heater intensity (0.0–1.0).
    SetHeatLevel { level: f32 },
}

impl AppCommand {
    /// Pulse period clamped into the `u32` millisecond domain.
    pub(crate) fn clamp_period(period_ms: i64) -> u32 {
        u32::try_from(period_ms.max(0)).unwrap_or(u32::MAX)
    }
}

// Float-to-int `as` casts saturate at the target bounds.
fn saturating_i32<'de, D: Deserializer<'de>>(de: D) -> Result<i32, D::Error> {
    f64::deserialize(de).map(|v| v.round() as i32)
}

fn saturating_i64<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
    f64::deserialize(de).map(|v| v.round() as i64)
}

/// Errors from [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Payload is not a JSON object with a known `"type"`.
    Malformed,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed command payload"),
        }
    }
}

/// Parse one JSON command payload.
pub fn decode(payload: &[u8]) -> Result<AppCommand, CommandError> {
    serde_json::from_slice(payload).map_err(|_| CommandError::Malformed)
}
