//! ### CTRL_MEAS - Measurement control (`0xF4`, 1 byte, R/W)
//!
//! Writing a [`ConversionCommand`] starts a single temperature or pressure conversion. The result
//! is available in the OUT registers (0xF6 - 0xF8) once the conversion time has elapsed.
//!
//! | Bits | Field | Description |
//! |---|---|---|
//! | 7:6 | oss | Oversampling setting of the pressure conversion |
//! | 5 | sco | Start of conversion. Stays `1` while a conversion runs, cleared when it is done |
//! | 4:0 | measurement | Measurement control, 0x0E for temperature, 0x14 for pressure |
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp085_rs::{Bmp085, Bmp085Result};
//! # use bmp085_rs::bus::Bus;
//! # use embedded_hal_async::delay::DelayNs;
//! # async fn demo<B: Bus, D: DelayNs>(mut device: Bmp085<B, D>)
//! #     -> Bmp085Result<(), B::Error> {
//! use bmp085_rs::register::ctrl_meas::{ConversionCommand, CtrlMeas, Oversampling};
//!
//! device.write::<CtrlMeas>(&ConversionCommand::Pressure(Oversampling::Standard)).await?;
//! let running = device.read::<CtrlMeas>().await?.conversion_running;
//! # Ok(()) }
//! ```
#![doc(alias = "CTRL_MEAS")]
use crate::register::{InvalidRegisterField, Readable, Reg, UnexpectedValue, Writable};

/// Marker struct for the CTRL_MEAS (0xF4) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
pub struct CtrlMeas;
impl Reg for CtrlMeas { const ADDR: u8 = 0xF4; }

const TEMPERATURE_COMMAND: u8 = 0x2E;
const PRESSURE_COMMAND: u8 = 0x34;
const SCO_BIT: u8 = 0b0010_0000;

/// Conversion requests accepted by CTRL_MEAS.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionCommand {
    /// Start a temperature conversion (0x2E). Takes at most 4.5 ms.
    Temperature,
    /// Start a pressure conversion at the given oversampling setting (`0x34 + (oss << 6)`).
    Pressure(Oversampling),
}

impl From<ConversionCommand> for u8 {
    fn from(value: ConversionCommand) -> Self {
        match value {
            ConversionCommand::Temperature => TEMPERATURE_COMMAND,
            ConversionCommand::Pressure(oss) => PRESSURE_COMMAND + (oss.oss() << 6),
        }
    }
}

impl Writable for CtrlMeas {
    type In = ConversionCommand;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = (*v).into();
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlMeasFields {
    pub oversampling: Oversampling,
    pub conversion_running: bool,
    pub measurement: u8,
}

impl Readable for CtrlMeas {
    type Out = CtrlMeasFields;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(CtrlMeasFields {
            oversampling: Oversampling::try_from(b[0] >> 6)
                .map_err(|e| InvalidRegisterField::new(Self::ADDR, e.0, 6))?,
            conversion_running: b[0] & SCO_BIT != 0,
            measurement: b[0] & 0b0001_1111,
        })
    }
}

/// Pressure oversampling setting (OSS).
///
/// Higher settings average more internal samples, which lowers noise at the cost of a longer
/// conversion time. See datasheet table 3.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    /// OSS 0: 1 sample, max conversion time 4.5 ms
    #[default]
    UltraLowPower,
    /// OSS 1: 2 samples, max conversion time 7.5 ms
    Standard,
    /// OSS 2: 4 samples, max conversion time 13.5 ms
    HighResolution,
    /// OSS 3: 8 samples, max conversion time 25.5 ms
    UltraHighResolution,
}

impl Oversampling {
    /// The numeric OSS value, 0 to 3.
    pub const fn oss(self) -> u8 {
        match self {
            Oversampling::UltraLowPower => 0,
            Oversampling::Standard => 1,
            Oversampling::HighResolution => 2,
            Oversampling::UltraHighResolution => 3,
        }
    }

    /// Worst-case pressure conversion time in whole milliseconds, `2 + (3 << oss)`.
    pub const fn conversion_time_ms(self) -> u32 {
        2 + (3 << self.oss())
    }
}

impl TryFrom<u8> for Oversampling {
    type Error = UnexpectedValue;
    fn try_from(field: u8) -> Result<Self, Self::Error> {
        match field {
            0 => Ok(Oversampling::UltraLowPower),
            1 => Ok(Oversampling::Standard),
            2 => Ok(Oversampling::HighResolution),
            3 => Ok(Oversampling::UltraHighResolution),
            other => Err(UnexpectedValue(other)),
        }
    }
}
