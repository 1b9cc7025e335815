//! Integration tests: AppService → HardwareAdapter → mock peripherals.

use heartbeat::app::commands::AppCommand;
use heartbeat::app::events::AppEvent;
use heartbeat::app::service::AppService;
use heartbeat::config::PropConfig;
use heartbeat::drivers::PulsePhase;

use super::mock_hw::{RecordingSink, Rig};

fn config() -> PropConfig {
    PropConfig {
        sample_interval_ms: 50,
        update_interval_ms: 10,
        pulse_period_ms: 1000,
        ..PropConfig::default()
    }
}

#[test]
fn configure_blanks_every_output() {
    let rig = Rig::new(&config());
    assert_eq!(rig.led_out(), (Some(0), Some(0), Some(0)));
    assert_eq!(rig.heat.last(), Some(0));
}

#[test]
fn start_emits_started() {
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    assert_eq!(sink.events, vec![AppEvent::Started]);
}

#[test]
fn samples_on_sample_cadence() {
    let mut rig = Rig::new(&config());
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();

    for now in (0..500u64).step_by(10) {
        app.tick(now, &mut rig.hw, &mut sink);
    }
    // 0, 50, ..., 450
    assert_eq!(rig.adc.reads(), 10);
    assert_eq!(sink.pressure_levels().len(), 10);
}

#[test]
fn pressure_reports_smoothed_level() {
    let mut rig = Rig::new(&config());
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();

    rig.adc.set(4095);
    for now in (0..=450u64).step_by(50) {
        app.tick(now, &mut rig.hw, &mut sink);
    }
    let levels = sink.pressure_levels();
    assert!((levels[0] - 0.1).abs() < 1e-6, "cold start bias");
    assert_eq!(*levels.last().unwrap(), 1.0);
    assert!(rig.hw.pressure().is_primed());
    assert_eq!(app.last_pressure().map(|p| p.at_ms), Some(450));
}

#[test]
fn pressure_never_leaves_unit_range() {
    let cfg = PropConfig {
        pressure_min_raw: 1000.0,
        pressure_max_raw: 3000.0,
        ..config()
    };
    let mut rig = Rig::new(&cfg);
    let mut app = AppService::new(&cfg);
    let mut sink = RecordingSink::new();

    for (i, raw) in [0u16, 4095, 500, 4095, 4095, 0, 2000].iter().enumerate() {
        rig.adc.set(*raw);
        app.tick(i as u64 * 50, &mut rig.hw, &mut sink);
    }
    for level in sink.pressure_levels() {
        assert!((0.0..=1.0).contains(&level), "level {level} out of range");
    }
}

#[test]
fn colour_reaches_pwm_only_on_update() {
    let mut rig = Rig::new(&config());
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();

    app.handle_command(
        AppCommand::SetColor {
            r: 200,
            g: 100,
            b: 50,
        },
        &mut rig.hw,
        &mut sink,
    );
    assert_eq!(rig.led_out(), (Some(0), Some(0), Some(0)));

    app.tick(0, &mut rig.hw, &mut sink);
    assert_eq!(rig.led_out(), (Some(60), Some(30), Some(15)));
}

#[test]
fn pulse_alternates_between_dim_and_bright() {
    let mut rig = Rig::new(&config());
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();

    app.handle_command(
        AppCommand::SetColor {
            r: 200,
            g: 100,
            b: 50,
        },
        &mut rig.hw,
        &mut sink,
    );

    app.tick(500, &mut rig.hw, &mut sink);
    assert_eq!(rig.hw.led().phase(), PulsePhase::Dim);
    assert_eq!(rig.led[0].last(), Some(60));

    app.tick(1010, &mut rig.hw, &mut sink);
    assert_eq!(rig.hw.led().phase(), PulsePhase::Bright);
    assert_eq!(rig.led_out(), (Some(200), Some(100), Some(50)));

    app.tick(2020, &mut rig.hw, &mut sink);
    assert_eq!(rig.hw.led().phase(), PulsePhase::Dim);
}

#[test]
fn one_flip_per_period_under_fast_polling() {
    let mut rig = Rig::new(&config());
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();
    app.handle_command(
        AppCommand::SetColor {
            r: 100,
            g: 100,
            b: 100,
        },
        &mut rig.hw,
        &mut sink,
    );

    for now in (0..=3_000u64).step_by(10) {
        app.tick(now, &mut rig.hw, &mut sink);
    }
    // Red channel history: the configure write, then one write per update.
    let history = rig.led[0].history();
    let transitions = history[1..].windows(2).filter(|w| w[0] != w[1]).count();
    // Flips at 1010 and 2020.
    assert_eq!(transitions, 2);
}

#[test]
fn heat_level_is_clamped_end_to_end() {
    let mut rig = Rig::new(&config());
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();

    app.handle_command(AppCommand::SetHeatLevel { level: 1.5 }, &mut rig.hw, &mut sink);
    app.tick(0, &mut rig.hw, &mut sink);
    assert_eq!(rig.heat.last(), Some(255));

    app.handle_command(AppCommand::SetHeatLevel { level: -0.2 }, &mut rig.hw, &mut sink);
    app.tick(10, &mut rig.hw, &mut sink);
    assert_eq!(rig.heat.last(), Some(0));
}

#[test]
fn sensor_does_not_drive_actuators() {
    let mut rig = Rig::new(&config());
    let mut app = AppService::new(&config());
    let mut sink = RecordingSink::new();

    rig.adc.set(4095);
    for now in (0..1_000u64).step_by(10) {
        app.tick(now, &mut rig.hw, &mut sink);
    }
    assert_eq!(rig.heat.last(), Some(0));
    assert_eq!(rig.led_out(), (Some(0), Some(0), Some(0)));
}
