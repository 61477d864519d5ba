//! Edge-triggered sequential elements: D / JK flip-flops and the 4-bit
//! binary counters.
//!
//! Transition functions are pure; [`latch`] applies one of them under the
//! clocking rules shared by every sequential circuit:
//!
//! ```text
//!   edge?  ──yes──▶ state = transition(state)
//!     │
//!     ▼
//!   reset line LOW? ──yes──▶ state = cleared     (always wins)
//! ```

use super::InputVector;

/// Counter values live in `0..COUNTER_MODULUS`.
pub const COUNTER_MODULUS: u8 = 16;

// ---------------------------------------------------------------------------
// Flip-flops
// ---------------------------------------------------------------------------

/// D flip-flop: capture the D level (input 0).
pub fn d_next(_state: bool, inputs: &InputVector) -> bool {
    inputs.level(0)
}

/// JK flip-flop transition table.
///
/// | J | K | next   |
/// |---|---|--------|
/// | 0 | 0 | hold   |
/// | 0 | 1 | reset  |
/// | 1 | 0 | set    |
/// | 1 | 1 | toggle |
pub const fn jk_next(state: bool, j: bool, k: bool) -> bool {
    match (j, k) {
        (true, true) => !state,
        (true, false) => true,
        (false, true) => false,
        (false, false) => state,
    }
}

/// JK flip-flop with J on input 0 and K on input 1.
pub fn jk_from_inputs(state: bool, inputs: &InputVector) -> bool {
    jk_next(state, inputs.level(0), inputs.level(1))
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

pub const fn count_up(value: u8) -> u8 {
    (value % COUNTER_MODULUS + 1) % COUNTER_MODULUS
}

pub const fn count_down(value: u8) -> u8 {
    (value % COUNTER_MODULUS + COUNTER_MODULUS - 1) % COUNTER_MODULUS
}

// ---------------------------------------------------------------------------
// Clocking
// ---------------------------------------------------------------------------

/// Advance `state` by one cycle.
///
/// `reset_level` is the raw reset line; it is active-low, so `false`
/// forces `cleared` regardless of `edge`.
pub fn latch<T>(
    state: T,
    edge: bool,
    reset_level: bool,
    cleared: T,
    transition: impl FnOnce(T) -> T,
) -> T {
    let next = if edge { transition(state) } else { state };
    if reset_level { next } else { cleared }
}
