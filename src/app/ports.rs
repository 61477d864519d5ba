//! Port traits — the hexagonal boundary between the lab logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LabService (domain)
//! ```
//!
//! Driven adapters (GPIO bank, serial console, monotonic clock, event
//! sinks) implement these traits.  The [`LabService`](super::service::LabService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use super::commands::CommandLine;
use crate::logic::InputVector;

// ───────────────────────────────────────────────────────────────
// Board port (driven adapter: GPIO ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Every digital line on the trainer board.
///
/// Implementations are expected to absorb pin faults themselves (log and
/// degrade); the domain treats line access as infallible.
pub trait BoardPort {
    /// Sample all eight switch inputs.
    fn read_inputs(&mut self) -> InputVector;

    /// Current level of the clock push-button.
    fn read_clock(&mut self) -> bool;

    /// Raw level of the reset line.  Active-low: `false` means asserted.
    fn read_reset(&mut self) -> bool;

    /// Level of the mode switch.
    fn read_mode(&mut self) -> bool;

    /// Drive output LED `index`.  Out-of-range indices are ignored.
    fn write_output(&mut self, index: usize, level: bool);

    /// Level currently driven on output `index`.
    fn output_level(&mut self, index: usize) -> bool;

    /// Drive the seven segment lines, bit 0 = segment a.
    fn write_segments(&mut self, pattern: u8);

    /// Drive every output and segment line low.
    fn clear_all(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Console port (driven adapter: serial ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Line-oriented text console.
pub trait ConsolePort {
    /// Return one fully received line if one is buffered.  Never blocks.
    fn poll_line(&mut self) -> Option<CommandLine>;

    /// Print one line (the adapter appends the terminator).
    fn write_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.
pub trait TimePort {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
