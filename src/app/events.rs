//! Outbound application events.
//!
//! The [`LabService`](super::service::LabService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, count them in a
//! test, etc.

use serde::Serialize;

use super::commands::CommandLine;
use crate::logic::circuit::Circuit;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the initial circuit).
    Started(Circuit),

    /// The active circuit changed.
    CircuitSelected { from: Circuit, to: Circuit },

    /// All outputs and sequential state were cleared.
    StateReset(Circuit),

    /// A console line matched neither a keyword nor a circuit.
    InvalidCommand(CommandLine),

    /// The astable timer flipped output 0.
    TimerToggled(bool),
}

/// Point-in-time view of the lab, printed by the `status` command.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub circuit: &'static str,
    pub category: &'static str,
    pub flip_flop: bool,
    pub counter: u8,
    pub clock: bool,
    pub mode: bool,
    pub cycles: u64,
}
