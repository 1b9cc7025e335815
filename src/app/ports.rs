//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Two layers of ports live here:
//!
//! - **Peripheral ports** bind a single component to hardware.  Analog inputs
//!   implement [`AnalogInput`]; PWM outputs implement
//!   [`embedded_hal::pwm::SetDutyCycle`] directly, so any HAL channel (or a
//!   test double) can drive the LED and heater.
//! - **Service ports** ([`SensorPort`], [`ActuatorPort`], [`EventSink`]) are
//!   what the [`AppService`](super::service::AppService) consumes via
//!   generics, so the driver loop never touches hardware directly.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::{ActuatorError, Result};

// ───────────────────────────────────────────────────────────────
// Analog input (peripheral port)
// ───────────────────────────────────────────────────────────────

/// One-shot analog input sampled by the pressure sensor.
///
/// Reads are assumed to succeed; a failing ADC returns `0`.
pub trait AnalogInput {
    /// GPIO this input is attached to.
    fn pin(&self) -> i32;

    /// Take one raw sample (0–4095 on a 12-bit ADC).
    fn read_raw(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn pin(&self) -> i32 {
        (**self).pin()
    }

    fn read_raw(&mut self) -> u16 {
        (**self).read_raw()
    }
}

/// Write an 8-bit duty to any `SetDutyCycle` channel, rescaling to the
/// channel's native resolution.
pub fn write_duty<P: SetDutyCycle>(pwm: &mut P, duty: u8) -> Result<()> {
    pwm.set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
        .map_err(|_| ActuatorError::PwmWriteFailed.into())
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Sample the pressure pad and return the normalised level in [0, 1].
    fn read_pressure(&mut self) -> f32;

    /// Smoothed raw value behind the most recent [`read_pressure`](Self::read_pressure).
    fn last_pressure_raw(&self) -> f32;

    /// Last normalised level without touching the ADC.
    fn last_pressure(&self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
///
/// Setters only store (clamped) targets; nothing reaches the PWM hardware
/// until [`update_actuators`](Self::update_actuators).
pub trait ActuatorPort {
    /// Set the LED target colour; each component is clamped to 0–255.
    fn set_color(&mut self, r: i32, g: i32, b: i32);

    /// Set the LED pulse half-cycle in milliseconds.
    fn set_pulse_rate(&mut self, period_ms: u32);

    /// Set the heater intensity; clamped to 0.0–1.0.
    fn set_heat_level(&mut self, level: f32);

    /// Evaluate the pulse phase at `now_ms` and write every PWM channel.
    fn update_actuators(&mut self, now_ms: u64) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log,
/// WebSocket uplink, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
