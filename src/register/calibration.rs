//! ### AC1..MD - Calibration coefficients (`0xAA` - `0xBF`, 11 x 2 bytes, R)
//!
//! Factory-programmed EEPROM words. Each coefficient is stored big-endian (MSB at the lower
//! address) and is read with its own 2-byte transfer. The marker types decode to the raw `u16`
//! word; whether a coefficient is signed is decided by [`crate::calibration::Calibration`]
//! (AC4, AC5 and AC6 are unsigned, all others are signed).
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp085_rs::{Bmp085, Bmp085Result};
//! # use bmp085_rs::bus::Bus;
//! # use embedded_hal_async::delay::DelayNs;
//! # async fn demo<B: Bus, D: DelayNs>(mut device: Bmp085<B, D>)
//! #     -> Bmp085Result<(), B::Error> {
//! use bmp085_rs::register::calibration::Ac1;
//!
//! let ac1 = device.read::<Ac1>().await? as i16;
//! # Ok(()) }
//! ```
#![doc(alias = "AC1")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for one 16-bit calibration word starting at `ADDR`.
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct CoefficientWord<const ADDR: u8>;
impl<const ADDR: u8> Reg for CoefficientWord<ADDR> { const ADDR: u8 = ADDR; }

impl<const ADDR: u8> Readable for CoefficientWord<ADDR> {
    type Out = u16;

    const N: usize = 2;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

pub type Ac1 = CoefficientWord<0xAA>;
pub type Ac2 = CoefficientWord<0xAC>;
pub type Ac3 = CoefficientWord<0xAE>;
pub type Ac4 = CoefficientWord<0xB0>;
pub type Ac5 = CoefficientWord<0xB2>;
pub type Ac6 = CoefficientWord<0xB4>;
pub type B1 = CoefficientWord<0xB6>;
pub type B2 = CoefficientWord<0xB8>;
pub type Mb = CoefficientWord<0xBA>;
pub type Mc = CoefficientWord<0xBC>;
pub type Md = CoefficientWord<0xBE>;
