//! RGB LED driver with a two-level brightness pulse.
//!
//! Three PWM channels drive the red, green and blue dies.  The commanded
//! colour is scaled by a brightness that steps between 100 % and 30 % every
//! pulse period.  The step is discrete on purpose: no easing curve.
//!
//! ## Timing contract
//!
//! Phase changes are detected by polling [`LedController::update`], not by a
//! timer interrupt.  A flip is seen at the first `update` after the period
//! has elapsed, so the caller's update interval bounds pulse jitter and must
//! be well below the pulse period.

use embedded_hal::pwm::SetDutyCycle;
use log::{debug, info};

use crate::app::ports::write_duty;
use crate::error::{Component, Error, Result};

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

/// Default pulse half-cycle.
pub const DEFAULT_PULSE_PERIOD_MS: u32 = 1000;

/// Brightness of the dim half of the pulse, in percent.
pub const DIM_PERCENT: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePhase {
    Bright,
    Dim,
}

impl PulsePhase {
    pub fn toggled(self) -> Self {
        match self {
            Self::Bright => Self::Dim,
            Self::Dim => Self::Bright,
        }
    }

    pub fn percent(self) -> u16 {
        match self {
            Self::Bright => 100,
            Self::Dim => DIM_PERCENT,
        }
    }
}

struct Channels<P> {
    r: P,
    g: P,
    b: P,
}

pub struct LedController<P> {
    channels: Option<Channels<P>>,
    target: Rgb,
    period_ms: u32,
    phase: PulsePhase,
    last_flip_ms: u64,
    output: Rgb,
}

impl<P: SetDutyCycle> LedController<P> {
    pub fn new() -> Self {
        Self {
            channels: None,
            target: (0, 0, 0),
            period_ms: DEFAULT_PULSE_PERIOD_MS,
            phase: PulsePhase::Dim,
            last_flip_ms: 0,
            output: (0, 0, 0),
        }
    }

    /// Bind the three colour channels, reset the colour to black and write
    /// it immediately.
    ///
    /// State is only committed once the blanking writes succeed; on error the
    /// controller is left exactly as it was.
    pub fn configure(&mut self, r: P, g: P, b: P) -> Result<()> {
        let mut channels = Channels { r, g, b };
        write_rgb(&mut channels, (0, 0, 0))?;
        self.channels = Some(channels);
        self.target = (0, 0, 0);
        self.output = (0, 0, 0);
        info!("led: configured, pulse period {} ms", self.period_ms);
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.channels.is_some()
    }

    /// Store the target colour, clamping each component to 0–255.
    /// Takes effect on the next [`update`](Self::update).
    pub fn set_color(&mut self, r: i32, g: i32, b: i32) {
        self.target = (clamp_u8(r), clamp_u8(g), clamp_u8(b));
    }

    /// Store the pulse half-cycle.  `0` flips the phase on every update.
    pub fn set_pulse_rate(&mut self, period_ms: u32) {
        self.period_ms = period_ms;
    }

    /// Advance the pulse phase and write the scaled colour.
    ///
    /// This is the only call that touches the PWM channels after
    /// [`configure`](Self::configure).  Returns the RGB duty triple written.
    pub fn update(&mut self, now_ms: u64) -> Result<Rgb> {
        let Some(channels) = self.channels.as_mut() else {
            return Err(Error::Unconfigured(Component::Led));
        };

        let elapsed = now_ms.saturating_sub(self.last_flip_ms);
        if self.period_ms == 0 || elapsed > u64::from(self.period_ms) {
            self.phase = self.phase.toggled();
            self.last_flip_ms = now_ms;
            debug!("led: phase -> {:?} at {} ms", self.phase, now_ms);
        }

        let out = scale(self.target, self.phase.percent());
        write_rgb(channels, out)?;
        self.output = out;
        Ok(out)
    }

    /// Clamped target colour.
    pub fn color(&self) -> Rgb {
        self.target
    }

    pub fn pulse_period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    /// Duty triple written by the last update.
    pub fn output(&self) -> Rgb {
        self.output
    }
}

impl<P: SetDutyCycle> Default for LedController<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn write_rgb<P: SetDutyCycle>(ch: &mut Channels<P>, (r, g, b): Rgb) -> Result<()> {
    write_duty(&mut ch.r, r)?;
    write_duty(&mut ch.g, g)?;
    write_duty(&mut ch.b, b)
}

fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Scale each channel by `percent`, rounding half up.
fn scale((r, g, b): Rgb, percent: u16) -> Rgb {
    let s = |c: u8| ((u16::from(c) * percent + 50) / 100) as u8;
    (s(r), s(g), s(b))
}
