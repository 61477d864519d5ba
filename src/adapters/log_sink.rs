//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (ESP-IDF logger on target, stderr on the host).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
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
            AppEvent::Started(circuit) => {
                info!("START | circuit={}", circuit);
            }
            AppEvent::CircuitSelected { from, to } => {
                info!("SELECT | {} -> {}", from, to);
            }
            AppEvent::StateReset(circuit) => {
                info!("RESET | circuit={}", circuit);
            }
            AppEvent::InvalidCommand(line) => {
                warn!("CMD | rejected '{}'", line);
            }
            AppEvent::TimerToggled(level) => {
                debug!("TIMER | out0={}", if *level { "HIGH" } else { "LOW" });
            }
        }
    }
}
