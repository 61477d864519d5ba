//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the logic lab: circuit selection,
//! console command dispatch, and the per-cycle evaluation of the active
//! circuit.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
