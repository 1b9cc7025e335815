//! Heartbeat prop firmware main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  EspHardware (Adc1Input + LedcPwm)   LogEventSink        │
//! │  (SensorPort + ActuatorPort)         (EventSink)         │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │       AppService (cadence · command queue)     │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Result, anyhow};
use esp_idf_hal::delay::FreeRtos;
use log::info;

use heartbeat::adapters::hardware::EspHardware;
use heartbeat::adapters::log_sink::LogEventSink;
use heartbeat::adapters::time::MonotonicClock;
use heartbeat::app::service::AppService;
use heartbeat::config::PropConfig;
use heartbeat::drivers::hw_init;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Heartbeat prop v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    // Pin map comes from the board defaults; the uplink can only change
    // actuator targets, never the wiring.
    let config = PropConfig::default();
    config
        .validate()
        .map_err(|e| anyhow!("config rejected: {e}"))?;

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals(&config)?;
    let mut hw = EspHardware::from_config(&config)?;

    // ── 4. App service ────────────────────────────────────────
    let clock = MonotonicClock::new();
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(&config);
    app.start(&mut sink);

    info!("System ready. Entering poll loop.");

    // ── 5. Poll loop ──────────────────────────────────────────
    loop {
        app.tick(clock.uptime_ms(), &mut hw, &mut sink);
        FreeRtos::delay_ms(config.update_interval_ms);
    }
}
