//! Application service: the poll-driven core loop.
//!
//! [`AppService`] owns the sampling/update cadence and the inbound command
//! queue.  All I/O flows through port traits injected at call sites, making
//! the whole service testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                  │       AppService       │
//! ActuatorPort ◀── │ cadence · command queue│
//!                  └────────────────────────┘
//! ```
//!
//! ## Cadence
//!
//! The caller invokes [`AppService::tick`] with a monotonic millisecond
//! clock at least every `update_interval_ms`.  The pressure sensor is
//! sampled every `sample_interval_ms` and every actuator is written every
//! `update_interval_ms`.  A late tick runs each due job once; missed slots
//! are not replayed.

use heapless::Deque;
use log::{info, warn};

use crate::config::PropConfig;

use super::commands::AppCommand;
use super::events::{AppEvent, PressureSample};
use super::ports::{ActuatorPort, EventSink, SensorPort};

/// Commands buffered between ticks.
pub const COMMAND_QUEUE_DEPTH: usize = 8;

// ───────────────────────────────────────────────────────────────
// Interval
// ───────────────────────────────────────────────────────────────

/// Fires at most once per `period_ms`; fires immediately the first time.
#[derive(Debug, Clone, Copy)]
struct Interval {
    period_ms: u64,
    last_ms: Option<u64>,
}

impl Interval {
    fn new(period_ms: u32) -> Self {
        Self {
            period_ms: u64::from(period_ms),
            last_ms: None,
        }
    }

    fn poll(&mut self, now_ms: u64) -> bool {
        let due = match self.last_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.period_ms,
        };
        if due {
            self.last_ms = Some(now_ms);
        }
        due
    }
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    sample: Interval,
    update: Interval,
    queue: Deque<AppCommand, COMMAND_QUEUE_DEPTH>,
    tick_count: u64,
    last_pressure: Option<PressureSample>,
}

impl AppService {
    /// Build the service from the cadence in `config`.
    pub fn new(config: &PropConfig) -> Self {
        Self {
            sample: Interval::new(config.sample_interval_ms),
            update: Interval::new(config.update_interval_ms),
            queue: Deque::new(),
            tick_count: 0,
            last_pressure: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "AppService started (sample every {} ms, update every {} ms)",
            self.sample.period_ms, self.update.period_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one poll cycle: drain commands → sample sensor → write actuators.
    ///
    /// `hw` implements both [`SensorPort`] and [`ActuatorPort`].
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Apply commands queued since the last tick
        while let Some(cmd) = self.queue.pop_front() {
            self.handle_command(cmd, hw, sink);
        }

        // 2. Sample the pressure pad
        if self.sample.poll(now_ms) {
            let level = hw.read_pressure();
            let sample = PressureSample {
                at_ms: now_ms,
                level,
                raw: hw.last_pressure_raw(),
            };
            self.last_pressure = Some(sample);
            sink.emit(&AppEvent::Pressure(sample));
        }

        // 3. Write every actuator; one failure must not stop the loop
        if self.update.poll(now_ms) {
            if let Err(e) = hw.update_actuators(now_ms) {
                warn!("actuator update failed: {}", e);
                sink.emit(&AppEvent::ActuatorFault(e));
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply a command immediately.  Targets change now; PWM output
    /// follows on the next actuator update.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::SetColor { r, g, b } => hw.set_color(r, g, b),
            AppCommand::SetPulseRate { period_ms } => {
                hw.set_pulse_rate(AppCommand::clamp_period(period_ms));
            }
            AppCommand::SetHeatLevel { level } => hw.set_heat_level(level),
        }
        sink.emit(&AppEvent::CommandApplied(cmd));
    }

    /// Buffer a command for the next [`tick`](Self::tick).
    ///
    /// A full queue hands the command back.
    pub fn enqueue(&mut self, cmd: AppCommand) -> Result<(), AppCommand> {
        self.queue.push_back(cmd).inspect_err(|_| {
            warn!("command queue full, dropping {:?}", cmd);
        })
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Most recent pressure sample, if any tick has sampled yet.
    pub fn last_pressure(&self) -> Option<PressureSample> {
        self.last_pressure
    }
}
