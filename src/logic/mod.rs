//! Digital-logic primitives — pure functions and small state holders.
//!
//! Nothing in here touches pins, the console, or the clock source.  The
//! [`LabService`](crate::app::service::LabService) samples the board,
//! hands the levels to these functions, and writes the results back.
//!
//! ```text
//!   InputVector ──▶ gates / sequential / timer ──▶ output levels
//!                        ▲
//!   clock line ──▶ EdgeDetector
//! ```

pub mod circuit;
pub mod edge;
pub mod gates;
pub mod sequential;
pub mod timer;

use crate::pins::INPUT_COUNT;

/// One polling cycle's worth of switch levels, input 0 first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputVector([bool; INPUT_COUNT]);

impl InputVector {
    pub const fn new(levels: [bool; INPUT_COUNT]) -> Self {
        Self(levels)
    }

    /// Build from a bitmask, bit `i` → input `i`.
    pub const fn from_bits(bits: u8) -> Self {
        let mut levels = [false; INPUT_COUNT];
        let mut i = 0;
        while i < INPUT_COUNT {
            levels[i] = (bits >> i) & 1 == 1;
            i += 1;
        }
        Self(levels)
    }

    /// Level of input `index`.  Out-of-range indices read low.
    pub fn level(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Inputs 0..3 packed as a nibble, input 0 in bit 0.
    pub fn low_nibble(&self) -> u8 {
        (0..4).fold(0, |acc, i| acc | (u8::from(self.0[i]) << i))
    }
}
