//! Combinational logic: basic gates, adders, the 4:1 multiplexer and the
//! BCD → seven-segment decoder.
//!
//! Every function here is stateless and re-evaluated each polling cycle.
//! Multi-output circuits return a bitmask where bit `i` is the level for
//! output line `i`.

use super::InputVector;

// ---------------------------------------------------------------------------
// Basic gates (uniform two-operand signature so they fit the dispatch table)
// ---------------------------------------------------------------------------

pub const fn and(a: bool, b: bool) -> bool {
    a && b
}

pub const fn or(a: bool, b: bool) -> bool {
    a || b
}

/// Single-input gate; `b` is ignored.
pub const fn not(a: bool, _b: bool) -> bool {
    !a
}

pub const fn nand(a: bool, b: bool) -> bool {
    !(a && b)
}

pub const fn nor(a: bool, b: bool) -> bool {
    !(a || b)
}

pub const fn xor(a: bool, b: bool) -> bool {
    a ^ b
}

pub const fn xnor(a: bool, b: bool) -> bool {
    !(a ^ b)
}

// ---------------------------------------------------------------------------
// Adders
// ---------------------------------------------------------------------------

/// Half adder on inputs 0, 1.  Bit 0 = sum, bit 1 = carry.
pub fn half_adder(inputs: &InputVector) -> u8 {
    let (a, b) = (inputs.level(0), inputs.level(1));
    pack(a ^ b, a && b)
}

/// Full adder on inputs 0, 1, 2 (carry-in).  Bit 0 = sum, bit 1 = carry.
pub fn full_adder(inputs: &InputVector) -> u8 {
    let (a, b, c) = (inputs.level(0), inputs.level(1), inputs.level(2));
    let sum = a ^ b ^ c;
    let carry = (a && b) || (b && c) || (a && c);
    pack(sum, carry)
}

const fn pack(bit0: bool, bit1: bool) -> u8 {
    (bit0 as u8) | ((bit1 as u8) << 1)
}

// ---------------------------------------------------------------------------
// 4:1 multiplexer
// ---------------------------------------------------------------------------

/// Input line carrying the low select bit.
pub const MUX_S0: usize = 2;
/// Input line carrying the high select bit.
pub const MUX_S1: usize = 3;
/// Data lines for select values 0..3 (A, B, C, D).
///
/// C sits on input 5 so that no data line shares a select line.
pub const MUX_DATA: [usize; 4] = [0, 1, 5, 4];

/// Route the data line chosen by (S1, S0) to output 0.
pub fn mux4(inputs: &InputVector) -> u8 {
    let select = usize::from(inputs.level(MUX_S0)) | (usize::from(inputs.level(MUX_S1)) << 1);
    u8::from(inputs.level(MUX_DATA[select]))
}

// ---------------------------------------------------------------------------
// BCD decoder / seven-segment encoder
// ---------------------------------------------------------------------------

/// Largest digit the display can render.
pub const MAX_DIGIT: u8 = 9;

/// Segment patterns for digits 0–9, bit 0 = segment a … bit 6 = segment g.
pub const SEGMENT_PATTERNS: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

/// BCD value on inputs 0..3, clamped into 0..=9.
///
/// Codes 10–15 are not valid BCD; they render as 9 rather than erroring.
pub fn bcd_value(inputs: &InputVector) -> u8 {
    inputs.low_nibble().min(MAX_DIGIT)
}

/// Segment pattern for `digit`, clamped into 0..=9.
pub fn seven_segment(digit: u8) -> u8 {
    SEGMENT_PATTERNS[usize::from(digit.min(MAX_DIGIT))]
}

/// Full decoder path: switches → BCD digit → segment pattern.
pub fn bcd_to_segments(inputs: &InputVector) -> u8 {
    seven_segment(bcd_value(inputs))
}
