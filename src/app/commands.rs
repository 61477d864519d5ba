//! Inbound console commands.
//!
//! A console line is either a control keyword (`menu`, `reset`,
//! `status`) or the exact name of a catalog circuit.  Keywords are
//! recognised before the catalog is consulted.

use crate::error::CircuitError;
use crate::logic::circuit::Circuit;

/// Longest console line kept; the rest is dropped by the adapter.
pub const CONSOLE_LINE_MAX: usize = 64;

/// One received console line, fixed capacity.
pub type CommandLine = heapless::String<CONSOLE_LINE_MAX>;

/// Commands the console can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Re-print the circuit catalog.
    Menu,
    /// Full state reset, selection unchanged.
    Reset,
    /// Print a JSON status line.
    Status,
    /// Switch to a circuit (then full reset).
    Select(Circuit),
}

impl Command {
    /// Parse an already-trimmed line.
    pub fn parse(line: &str) -> Result<Self, CircuitError> {
        match line {
            "menu" => Ok(Self::Menu),
            "reset" => Ok(Self::Reset),
            "status" => Ok(Self::Status),
            name => Circuit::from_name(name)
                .map(Self::Select)
                .ok_or(CircuitError::InvalidName),
        }
    }
}

/// Copy `raw` into a [`CommandLine`], truncating at a char boundary.
pub fn to_command_line(raw: &str) -> CommandLine {
    let mut line = CommandLine::new();
    for ch in raw.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}
