//! Register catalog of the BMP085.
//!
//! Each register (or fixed-size register block) is a marker type implementing [`Readable`]
//! and/or [`Writable`], which carries its address, transfer length and value encoding. Use the
//! markers with [`crate::Bmp085::read`] and [`crate::Bmp085::write`].
//!
//! | Address | Marker | Access |
//! |---|---|---|
//! | 0xAA - 0xBF | [`calibration::Ac1`] .. [`calibration::Md`] | R |
//! | 0xD0 | [`chip_id::ChipId`] | R |
//! | 0xE0 | [`soft_reset::SoftReset`] | W |
//! | 0xF4 | [`ctrl_meas::CtrlMeas`] | R/W |
//! | 0xF6 - 0xF8 | [`out::OutWord`], [`out::OutMsb`], [`out::OutLsb`], [`out::OutXlsb`] | R |
pub mod calibration;
pub mod chip_id;
pub mod ctrl_meas;
pub mod out;
pub mod soft_reset;

/// A register held a bit pattern the driver does not know how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidRegisterField {
    pub register: u8,
    pub value: u8,
    pub bit_offset: u8,
}

impl InvalidRegisterField {
    pub fn new(register: u8, value: u8, bit_offset: u8) -> Self {
        Self { register, value, bit_offset }
    }
}

pub struct UnexpectedValue(pub u8);

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    /// Number of bytes read, starting at `ADDR`. At most 2, the longest block the bus buffers.
    const N: usize = 1;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField>;
}

pub trait Writable: Reg {
    type In;
    /// Number of bytes written after the address byte. At most 2.
    const N: usize = 1;
    fn encode(v: &Self::In, out: &mut [u8]);
}
