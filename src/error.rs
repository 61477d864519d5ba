//! Unified error types for the LogicLab firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! the top-level loop's error handling uniform.  All variants are `Copy`
//! so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A console command named no known circuit.
    Circuit(CircuitError),
    /// A GPIO line could not be read or driven.
    Pin(PinError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circuit(e) => write!(f, "circuit: {e}"),
            Self::Pin(e) => write!(f, "pin: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Circuit selection errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitError {
    /// The requested name is neither a control keyword nor a catalog entry.
    InvalidName,
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(f, "invalid circuit name"),
        }
    }
}

impl core::error::Error for CircuitError {}

impl From<CircuitError> for Error {
    fn from(e: CircuitError) -> Self {
        Self::Circuit(e)
    }
}

// ---------------------------------------------------------------------------
// Pin errors
// ---------------------------------------------------------------------------

/// Which physical line a [`PinError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Input(usize),
    Output(usize),
    Segment(usize),
    Clock,
    Reset,
    Mode,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(i) => write!(f, "input {i}"),
            Self::Output(i) => write!(f, "output {i}"),
            Self::Segment(i) => write!(f, "segment {i}"),
            Self::Clock => write!(f, "clock"),
            Self::Reset => write!(f, "reset"),
            Self::Mode => write!(f, "mode"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    ReadFailed(Line),
    WriteFailed(Line),
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(line) => write!(f, "read failed on {line}"),
            Self::WriteFailed(line) => write!(f, "write failed on {line}"),
        }
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
