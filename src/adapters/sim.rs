//! Simulated GPIO lines for the host build and tests.
//!
//! A [`SimLine`] is a shared boolean level.  Clones observe the same
//! level, so the [`PinBank`] can own one handle while the simulator (or a
//! test) keeps another as a probe to flip switches and watch LEDs.

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use super::pin_bank::PinBank;
use crate::pins::{INPUT_COUNT, OUTPUT_COUNT, SEGMENT_COUNT};

#[derive(Debug, Clone, Default)]
pub struct SimLine {
    level: Rc<Cell<bool>>,
}

impl SimLine {
    pub fn new(level: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
        }
    }

    pub fn get(&self) -> bool {
        self.level.get()
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }
}

impl ErrorType for SimLine {
    type Error = Infallible;
}

impl InputPin for SimLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.get())
    }
}

impl OutputPin for SimLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for SimLine {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.get())
    }
}

/// Probe handles onto every line of a simulated board.
#[derive(Debug, Clone)]
pub struct SimProbes {
    pub inputs: [SimLine; INPUT_COUNT],
    pub outputs: [SimLine; OUTPUT_COUNT],
    pub segments: [SimLine; SEGMENT_COUNT],
    pub clock: SimLine,
    pub reset: SimLine,
    pub mode: SimLine,
}

impl SimProbes {
    /// Output levels packed, output 0 in bit 0.
    pub fn output_bits(&self) -> u8 {
        pack(&self.outputs)
    }

    /// Segment levels packed, segment a in bit 0.
    pub fn segment_pattern(&self) -> u8 {
        pack(&self.segments)
    }
}

fn pack(lines: &[SimLine]) -> u8 {
    lines
        .iter()
        .enumerate()
        .fold(0, |acc, (i, line)| acc | (u8::from(line.get()) << i))
}

/// Constructor for a fully simulated board.
pub struct SimBoard;

impl SimBoard {
    /// All lines LOW except reset, which idles HIGH (released) as it would
    /// behind a pull-up.
    pub fn build() -> (PinBank<SimLine, SimLine>, SimProbes) {
        let probes = SimProbes {
            inputs: core::array::from_fn(|_| SimLine::new(false)),
            outputs: core::array::from_fn(|_| SimLine::new(false)),
            segments: core::array::from_fn(|_| SimLine::new(false)),
            clock: SimLine::new(false),
            reset: SimLine::new(true),
            mode: SimLine::new(false),
        };
        let bank = PinBank::new(
            probes.inputs.clone(),
            probes.outputs.clone(),
            probes.segments.clone(),
            probes.clock.clone(),
            probes.reset.clone(),
            probes.mode.clone(),
        );
        (bank, probes)
    }
}
