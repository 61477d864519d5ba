//! GPIO pin bank — bridges `embedded-hal` digital pins to [`BoardPort`].
//!
//! Generic over any [`InputPin`] / [`StatefulOutputPin`] pair, so the same
//! adapter drives ESP-IDF `PinDriver`s on target and [`SimLine`]s on the
//! host.  Pin faults are logged and degraded here (reads fall back to
//! LOW, writes are dropped); they never reach the domain.
//!
//! [`SimLine`]: super::sim::SimLine

use embedded_hal::digital::{InputPin, PinState, StatefulOutputPin};
use log::warn;

use crate::app::ports::BoardPort;
use crate::error::{Line, PinError, Result};
use crate::logic::InputVector;
use crate::pins::{INPUT_COUNT, OUTPUT_COUNT, SEGMENT_COUNT};

/// Every line on the board, grouped by role.
pub struct PinBank<I, O> {
    inputs: [I; INPUT_COUNT],
    outputs: [O; OUTPUT_COUNT],
    segments: [O; SEGMENT_COUNT],
    clock: I,
    reset: I,
    mode: I,
}

impl<I, O> PinBank<I, O>
where
    I: InputPin,
    O: StatefulOutputPin,
{
    pub fn new(
        inputs: [I; INPUT_COUNT],
        outputs: [O; OUTPUT_COUNT],
        segments: [O; SEGMENT_COUNT],
        clock: I,
        reset: I,
        mode: I,
    ) -> Self {
        Self {
            inputs,
            outputs,
            segments,
            clock,
            reset,
            mode,
        }
    }

    fn read(pin: &mut I, line: Line) -> Result<bool> {
        pin.is_high().map_err(|_| PinError::ReadFailed(line).into())
    }

    fn drive(pin: &mut O, line: Line, level: bool) -> Result<()> {
        pin.set_state(PinState::from(level))
            .map_err(|_| PinError::WriteFailed(line).into())
    }

    fn read_or_low(pin: &mut I, line: Line) -> bool {
        Self::read(pin, line).unwrap_or_else(|e| {
            warn!("{} (treating as LOW)", e);
            false
        })
    }

    fn drive_or_log(pin: &mut O, line: Line, level: bool) {
        if let Err(e) = Self::drive(pin, line, level) {
            warn!("{}", e);
        }
    }
}

impl<I, O> BoardPort for PinBank<I, O>
where
    I: InputPin,
    O: StatefulOutputPin,
{
    fn read_inputs(&mut self) -> InputVector {
        let mut levels = [false; INPUT_COUNT];
        for (i, (pin, level)) in self.inputs.iter_mut().zip(levels.iter_mut()).enumerate() {
            *level = Self::read_or_low(pin, Line::Input(i));
        }
        InputVector::new(levels)
    }

    fn read_clock(&mut self) -> bool {
        Self::read_or_low(&mut self.clock, Line::Clock)
    }

    fn read_reset(&mut self) -> bool {
        // A reset line that cannot be read must not hold the lab in reset.
        Self::read(&mut self.reset, Line::Reset).unwrap_or_else(|e| {
            warn!("{} (treating as released)", e);
            true
        })
    }

    fn read_mode(&mut self) -> bool {
        Self::read_or_low(&mut self.mode, Line::Mode)
    }

    fn write_output(&mut self, index: usize, level: bool) {
        if let Some(pin) = self.outputs.get_mut(index) {
            Self::drive_or_log(pin, Line::Output(index), level);
        }
    }

    fn output_level(&mut self, index: usize) -> bool {
        let Some(pin) = self.outputs.get_mut(index) else {
            return false;
        };
        pin.is_set_high().unwrap_or_else(|_| {
            warn!("{}", PinError::ReadFailed(Line::Output(index)));
            false
        })
    }

    fn write_segments(&mut self, pattern: u8) {
        for (i, pin) in self.segments.iter_mut().enumerate() {
            Self::drive_or_log(pin, Line::Segment(i), (pattern >> i) & 1 == 1);
        }
    }

    fn clear_all(&mut self) {
        for (i, pin) in self.outputs.iter_mut().enumerate() {
            Self::drive_or_log(pin, Line::Output(i), false);
        }
        self.write_segments(0);
    }
}
