//! GPIO / peripheral pin assignments for the LogicLab trainer board.
//!
//! Single source of truth — the hardware adapter references this module
//! rather than hard-coding pin numbers.  Change a pin here and it
//! propagates everywhere.
//!
//! GPIO 19/20 (USB), 26–32 (flash/PSRAM) and the strapping pins 0, 45, 46
//! are deliberately left unused.

// ---------------------------------------------------------------------------
// Line counts
// ---------------------------------------------------------------------------

/// Number of switch inputs (A, B, C, ... on the front panel).
pub const INPUT_COUNT: usize = 8;
/// Number of LED outputs.
pub const OUTPUT_COUNT: usize = 8;
/// Number of seven-segment driver lines (a..g).
pub const SEGMENT_COUNT: usize = 7;

// ---------------------------------------------------------------------------
// Switch inputs (active HIGH, internal pull-up)
// ---------------------------------------------------------------------------

/// Input switches 0..7, in logical order.
pub const INPUT_GPIOS: [i32; INPUT_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8];

// ---------------------------------------------------------------------------
// LED outputs
// ---------------------------------------------------------------------------

/// Output LEDs 0..7, in logical order.
pub const OUTPUT_GPIOS: [i32; OUTPUT_COUNT] = [9, 10, 11, 12, 13, 14, 15, 16];

// ---------------------------------------------------------------------------
// Special lines
// ---------------------------------------------------------------------------

/// Clock push-button for sequential circuits (rising edge = clock tick).
pub const CLOCK_GPIO: i32 = 17;
/// System reset push-button. LOW = reset asserted.
pub const RESET_GPIO: i32 = 18;
/// Mode switch (read and reported, not used by any circuit).
pub const MODE_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// Seven-segment display (common cathode, segment a first)
// ---------------------------------------------------------------------------

pub const SEGMENT_GPIOS: [i32; SEGMENT_COUNT] = [38, 39, 40, 41, 42, 47, 48];
