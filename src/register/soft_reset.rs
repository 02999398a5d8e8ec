//! ### SOFT_RESET (`0xE0`, 1 byte, Write-only)
//!
//! Writing 0xB6 performs the same sequence as a power-on reset. The calibration EEPROM is not
//! affected, so coefficients loaded before the reset remain valid.
//!
//! See also: [`crate::Bmp085::soft_reset()`]
#![doc(alias = "SOFT_RESET")]
use crate::register::{Reg, Writable};

/// Marker type for the SOFT_RESET (0xE0) register
pub struct SoftReset;
impl Reg for SoftReset { const ADDR: u8 = 0xE0; }

/// The payload for the SOFT_RESET (0xE0) register.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SoftResetData {
    /// Triggers a power-on-reset sequence. Any other value is ignored by the device.
    Reset,
}

impl From<SoftResetData> for u8 {
    fn from(value: SoftResetData) -> Self {
        match value {
            SoftResetData::Reset => 0xB6,
        }
    }
}

impl Writable for SoftReset {
    type In = SoftResetData;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = (*v).into();
    }
}
