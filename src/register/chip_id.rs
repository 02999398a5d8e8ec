//! ### ID - Chip identification number (`0xD0`, 1 byte, R)
//!
//! Contains the chip identification code, which is always 0x55 for BMP085/BMP180.
//! Can be read to check that device communication works.
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp085_rs::{Bmp085, Bmp085Result};
//! # use bmp085_rs::bus::Bus;
//! # use embedded_hal_async::delay::DelayNs;
//! # async fn demo<B: Bus, D: DelayNs>(mut device: Bmp085<B, D>)
//! #     -> Bmp085Result<(), B::Error> {
//! use bmp085_rs::register::chip_id::ChipId;
//!
//! let id = device.read::<ChipId>().await?;
//! println!("{:?}", id);
//!
//! # Ok(()) }
//! ```
#![doc(alias = "ID")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the ID (0xD0) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`crate::Bmp085::read::<ChipId>()`] or [`crate::Bmp085::chip_id()`]
pub struct ChipId;
impl Reg for ChipId { const ADDR: u8 = 0xD0; }

impl Readable for ChipId {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}
