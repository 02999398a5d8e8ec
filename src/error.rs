//! Errors that can occur when using the BMP085 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during
//! communication with the BMP085 and while compensating its readings.
//! It is generic over the underlying I2C error type.

use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the BMP085 device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmp085Error<BusError> {
    /// An error has occurred in the I2C driver
    Bus(BusError),

    /// Unable to communicate with BMP085
    ///
    /// Could possibly indicate an error with pin configuration and/or wiring.
    NotConnected,

    /// A temperature or pressure was requested before [`crate::Bmp085::calibrate`] succeeded.
    NotCalibrated,

    /// The [`crate::calibration::CompensationContext`] passed to [`crate::Bmp085::pressure`] was
    /// produced under a different set of calibration coefficients.
    ///
    /// Take a fresh temperature reading and use its context instead.
    StaleContext,

    /// A calibration word read back as 0x0000 or 0xFFFF.
    ///
    /// The datasheet uses these values to detect a failed EEPROM read, so the coefficients are
    /// rejected instead of silently producing wrong readings.
    InvalidCalibration { register: u8, value: u16 },

    /// Reading from a register returned unexpected data. This should not happen in normal circumstances.
    ///
    /// Could possibly indicate a bug in the driver, or less likely, a faulty chip or interference.
    UnexpectedRegisterData(InvalidRegisterField),

    /// The device did not signal the end of a conversion within the allowed number of polls.
    Timeout,

    /// A divisor in the compensation formulas evaluated to zero.
    ///
    /// Only possible with coefficients that did not come from a working sensor.
    CompensationOverflow,
}
