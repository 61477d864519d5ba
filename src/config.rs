//! System configuration parameters
//!
//! All tunable parameters for the LogicLab firmware.  Values can be
//! overridden from a JSON document (host simulator: first CLI argument);
//! anything missing falls back to the defaults below.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::logic::circuit::Circuit;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Delay between polling cycles (milliseconds)
    pub poll_interval_ms: u32,
    /// Astable multivibrator toggle period (milliseconds)
    pub timer_period_ms: u32,

    // --- Console ---
    /// Print `Output: HIGH|LOW` every cycle while a basic gate is active
    pub report_gate_output: bool,

    // --- Startup ---
    /// Circuit selected at boot
    pub initial_circuit: Circuit,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 10,    // 100 Hz polling
            timer_period_ms: 1000,   // 1 Hz toggle
            report_gate_output: true,
            initial_circuit: Circuit::And,
        }
    }
}

/// Errors from loading a [`SystemConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    Parse(serde_json::Error),
    /// A field failed range validation.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::error::Error for ConfigError {}

impl SystemConfig {
    /// Reject values that would stall the loop or make the timer
    /// unobservable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.timer_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("timer_period_ms must be > 0"));
        }
        if self.poll_interval_ms >= self.timer_period_ms {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms must be shorter than timer_period_ms",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
