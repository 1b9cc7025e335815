//! Mock peripherals for integration tests.
//!
//! Records every PWM write so tests can assert on the full duty history
//! without touching real LEDC registers, and replays scripted ADC samples.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::pwm::{self, ErrorKind, ErrorType, SetDutyCycle};
use heartbeat::adapters::hardware::HardwareAdapter;
use heartbeat::app::events::AppEvent;
use heartbeat::app::ports::{AnalogInput, EventSink};
use heartbeat::config::PropConfig;

// ── MockPwm ───────────────────────────────────────────────────

/// PWM channel whose write log is shared with the test through `Rc`.
///
/// Writes can be made to fail with [`MockPwm::set_failing`]; failed writes
/// are not logged.
#[derive(Clone, Default)]
pub struct MockPwm {
    writes: Rc<RefCell<Vec<u16>>>,
    fail: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel that rejects every write until `set_failing(false)`.
    pub fn failing() -> Self {
        let pwm = Self::default();
        pwm.set_failing(true);
        pwm
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn last(&self) -> Option<u16> {
        self.writes.borrow().last().copied()
    }

    pub fn history(&self) -> Vec<u16> {
        self.writes.borrow().clone()
    }
}

#[derive(Debug)]
pub struct MockPwmError;

impl pwm::Error for MockPwmError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for MockPwm {
    type Error = MockPwmError;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), MockPwmError> {
        if self.fail.get() {
            return Err(MockPwmError);
        }
        self.writes.borrow_mut().push(duty);
        Ok(())
    }
}

// ── MockAdc ───────────────────────────────────────────────────

/// Analog input returning whatever the test last stored.
#[derive(Clone, Default)]
pub struct MockAdc {
    value: Rc<RefCell<u16>>,
    reads: Rc<RefCell<usize>>,
}

#[allow(dead_code)]
impl MockAdc {
    pub fn set(&self, raw: u16) {
        *self.value.borrow_mut() = raw;
    }

    pub fn reads(&self) -> usize {
        *self.reads.borrow()
    }
}

impl AnalogInput for MockAdc {
    fn pin(&self) -> i32 {
        36
    }

    fn read_raw(&mut self) -> u16 {
        *self.reads.borrow_mut() += 1;
        *self.value.borrow()
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// A configured adapter plus handles onto every mock peripheral.
pub struct Rig {
    pub hw: HardwareAdapter<MockAdc, MockPwm>,
    pub adc: MockAdc,
    pub led: [MockPwm; 3],
    pub heat: MockPwm,
}

#[allow(dead_code)]
impl Rig {
    pub fn new(config: &PropConfig) -> Self {
        let adc = MockAdc::default();
        let led = [MockPwm::new(), MockPwm::new(), MockPwm::new()];
        let heat = MockPwm::new();
        let mut hw = HardwareAdapter::new();
        hw.configure(config, adc.clone(), led.clone(), heat.clone())
            .expect("mock rig config");
        Self { hw, adc, led, heat }
    }

    pub fn led_out(&self) -> (Option<u16>, Option<u16>, Option<u16>) {
        (self.led[0].last(), self.led[1].last(), self.led[2].last())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressure_levels(&self) -> Vec<f32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Pressure(p) => Some(p.level),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
