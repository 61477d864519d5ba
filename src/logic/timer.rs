//! Free-running astable multivibrator.
//!
//! Toggles once per `period_ms`, driven purely by elapsed time.  The
//! output level itself lives on the pin; this only tracks the phase.

#[derive(Debug, Clone, Copy)]
pub struct AstableTimer {
    period_ms: u32,
    /// Timestamp of the last toggle (or of the last restart).
    last_toggle_ms: u64,
}

impl AstableTimer {
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_toggle_ms: 0,
        }
    }

    /// Re-anchor the phase at `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.last_toggle_ms = now_ms;
    }

    /// Returns `true` when a full period has elapsed since the last toggle,
    /// recording `now_ms` as the new phase marker.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_toggle_ms) >= u64::from(self.period_ms) {
            self.last_toggle_ms = now_ms;
            true
        } else {
            false
        }
    }

    pub fn last_toggle_ms(&self) -> u64 {
        self.last_toggle_ms
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}
