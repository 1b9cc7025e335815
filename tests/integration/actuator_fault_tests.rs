//! Integration tests: PWM write failures through the adapter and service.

use heartbeat::adapters::hardware::HardwareAdapter;
use heartbeat::app::events::AppEvent;
use heartbeat::app::ports::{ActuatorPort, SensorPort};
use heartbeat::app::service::AppService;
use heartbeat::config::PropConfig;
use heartbeat::error::{ActuatorError, Error};

use super::mock_hw::{MockAdc, MockPwm, RecordingSink, Rig};

const WRITE_FAILED: Error = Error::Actuator(ActuatorError::PwmWriteFailed);

fn faults(sink: &RecordingSink) -> usize {
    sink.events
        .iter()
        .filter(|e| matches!(e, AppEvent::ActuatorFault(WRITE_FAILED)))
        .count()
}

#[test]
fn failed_led_write_still_drives_heater() {
    let mut rig = Rig::new(&PropConfig::default());
    rig.led[0].set_failing(true);

    rig.hw.set_heat_level(1.0);
    assert_eq!(rig.hw.update_actuators(0), Err(WRITE_FAILED));
    assert_eq!(rig.heat.last(), Some(255));
}

#[test]
fn failed_heater_write_is_reported() {
    let mut rig = Rig::new(&PropConfig::default());
    rig.heat.set_failing(true);

    rig.hw.set_color(200, 100, 50);
    assert_eq!(rig.hw.update_actuators(0), Err(WRITE_FAILED));
    // LED half still written; starts in the dim phase.
    assert_eq!(rig.led_out(), (Some(60), Some(30), Some(15)));
}

#[test]
fn tick_reports_fault_and_keeps_running() {
    let config = PropConfig {
        update_interval_ms: 10,
        ..PropConfig::default()
    };
    let mut rig = Rig::new(&config);
    let mut app = AppService::new(&config);
    let mut sink = RecordingSink::new();

    rig.led[2].set_failing(true);
    rig.hw.set_heat_level(0.5);
    app.tick(0, &mut rig.hw, &mut sink);
    assert_eq!(faults(&sink), 1);
    assert_eq!(rig.heat.last(), Some(128));
    assert_eq!(app.tick_count(), 1);

    rig.led[2].set_failing(false);
    rig.adc.set(4095);
    app.tick(10, &mut rig.hw, &mut sink);
    assert_eq!(faults(&sink), 1);
    assert_eq!(app.tick_count(), 2);
    assert_eq!(rig.led[2].last(), Some(0));
}

#[test]
fn failed_configure_binds_nothing() {
    let adc = MockAdc::default();
    let led = [MockPwm::new(), MockPwm::new(), MockPwm::new()];
    let heat = MockPwm::failing();
    let mut hw = HardwareAdapter::new();

    assert_eq!(
        hw.configure(&PropConfig::default(), adc.clone(), led, heat.clone()),
        Err(WRITE_FAILED)
    );
    assert!(!hw.pressure().is_configured());
    assert!(!hw.led().is_configured());
    assert!(!hw.heat().is_configured());

    adc.set(4095);
    assert_eq!(hw.read_pressure(), 0.0);
    assert_eq!(adc.reads(), 0);
}

#[test]
fn failed_led_configure_binds_nothing() {
    let adc = MockAdc::default();
    let led = [MockPwm::new(), MockPwm::failing(), MockPwm::new()];
    let mut hw = HardwareAdapter::new();

    assert_eq!(
        hw.configure(&PropConfig::default(), adc, led, MockPwm::new()),
        Err(WRITE_FAILED)
    );
    assert!(!hw.pressure().is_configured());
    assert!(!hw.led().is_configured());
    assert!(!hw.heat().is_configured());
}
