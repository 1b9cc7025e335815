//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A WebSocket uplink would implement the same trait.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            // Sampled at tens of Hz; keep it out of the default log level.
            AppEvent::Pressure(p) => {
                debug!(
                    "PRESS | t={}ms | level={:.3} | raw={:.0}",
                    p.at_ms, p.level, p.raw
                );
            }
            AppEvent::CommandApplied(cmd) => {
                info!("CMD   | {:?}", cmd);
            }
            AppEvent::ActuatorFault(e) => {
                warn!("FAULT | {}", e);
            }
            AppEvent::Started => {
                info!("START | polling");
            }
        }
    }
}
