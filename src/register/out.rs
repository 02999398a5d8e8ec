//! ### OUT_MSB / OUT_LSB / OUT_XLSB - Conversion result (`0xF6` - `0xF8`, R)
//!
//! Holds the raw (uncompensated) result of the last conversion. A temperature result is the
//! 16-bit word at 0xF6/0xF7. A pressure result is up to 19 bits spread over all three
//! registers and is assembled by [`crate::Bmp085::read_raw_pressure()`].
//!
//! These are raw values. For most use cases [`crate::Bmp085::temperature()`] and
//! [`crate::Bmp085::pressure()`] are what you want.
#![doc(alias = "OUT_MSB")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for reading OUT_MSB and OUT_LSB (0xF6 - 0xF7) as one big-endian word.
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct OutWord;
impl Reg for OutWord { const ADDR: u8 = 0xF6; }

impl Readable for OutWord {
    type Out = u16;

    const N: usize = 2;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

/// Marker struct for the OUT_MSB (0xF6) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
pub struct OutMsb;
impl Reg for OutMsb { const ADDR: u8 = 0xF6; }

impl Readable for OutMsb {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}

/// Marker struct for the OUT_LSB (0xF7) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
pub struct OutLsb;
impl Reg for OutLsb { const ADDR: u8 = 0xF7; }

impl Readable for OutLsb {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}

/// Marker struct for the OUT_XLSB (0xF8) register
///
/// Only bits 7:3 carry data, and only when oversampling is enabled.
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
pub struct OutXlsb;
impl Reg for OutXlsb { const ADDR: u8 = 0xF8; }

impl Readable for OutXlsb {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}
