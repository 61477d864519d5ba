//! Hardware adapter — acquires the trainer board's GPIOs on ESP32-S3.
//!
//! Builds a [`PinBank`] of ESP-IDF `PinDriver`s from the assignments in
//! [`pins`](crate::pins).  Switch inputs, clock, reset and mode are
//! configured with internal pull-ups, so an unconnected reset line reads
//! HIGH (released).  This is the only module that touches real GPIO.

use esp_idf_hal::gpio::{AnyIOPin, Input, Output, PinDriver, Pull};
use esp_idf_sys::EspError;
use log::{error, info};

use super::pin_bank::PinBank;
use crate::error::{Error, Result};
use crate::pins;

pub type EspInput = PinDriver<'static, AnyIOPin, Input>;
pub type EspOutput = PinDriver<'static, AnyIOPin, Output>;
pub type EspBoard = PinBank<EspInput, EspOutput>;

fn input(gpio: i32) -> core::result::Result<EspInput, EspError> {
    // SAFETY: every GPIO number in `pins` is claimed exactly once, here,
    // before the polling loop starts.
    let mut pin = PinDriver::input(unsafe { AnyIOPin::new(gpio) })?;
    pin.set_pull(Pull::Up)?;
    Ok(pin)
}

fn output(gpio: i32) -> core::result::Result<EspOutput, EspError> {
    // SAFETY: see `input`.
    let mut pin = PinDriver::output(unsafe { AnyIOPin::new(gpio) })?;
    pin.set_low()?;
    Ok(pin)
}

fn bank<T, const N: usize>(
    gpios: &[i32; N],
    make: fn(i32) -> core::result::Result<T, EspError>,
) -> core::result::Result<[T; N], EspError> {
    let mut pins: heapless::Vec<T, N> = heapless::Vec::new();
    for &gpio in gpios {
        // Capacity equals N, so push cannot fail.
        let _ = pins.push(make(gpio)?);
    }
    Ok(pins
        .into_array()
        .unwrap_or_else(|_| unreachable!("pin bank sized by const N")))
}

fn claim() -> core::result::Result<EspBoard, EspError> {
    Ok(PinBank::new(
        bank(&pins::INPUT_GPIOS, input)?,
        bank(&pins::OUTPUT_GPIOS, output)?,
        bank(&pins::SEGMENT_GPIOS, output)?,
        input(pins::CLOCK_GPIO)?,
        input(pins::RESET_GPIO)?,
        input(pins::MODE_GPIO)?,
    ))
}

/// Claim every lab GPIO.  Call once from `main()`.
pub fn take_board() -> Result<EspBoard> {
    let board = claim().map_err(|e| {
        error!("hw: GPIO setup failed: {}", e);
        Error::Init("GPIO setup failed")
    })?;
    info!(
        "hw: {} inputs, {} outputs, {} segments configured",
        pins::INPUT_COUNT,
        pins::OUTPUT_COUNT,
        pins::SEGMENT_COUNT
    );
    Ok(board)
}
