//! Calibration coefficients and the fixed-point compensation algorithm.
//!
//! The formulas follow the integer reference code of the BMP085 datasheet (section 3.5). All
//! intermediates are 32-bit two's complement values, so the arithmetic below uses explicit
//! wrapping operations and keeps the datasheet's unsigned `b4`/`b7` terms unsigned.

use crate::config::Oversampling;

/// The 11 factory calibration coefficients of one device.
///
/// Loaded by [`crate::Bmp085::calibrate`], or constructed directly to run the compensation
/// offline on recorded raw values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

/// Carries the temperature intermediate B5 from a temperature compensation into the pressure
/// compensation that depends on it.
///
/// Only obtainable from a [`Temperature`], which makes "temperature before pressure" a data
/// dependency instead of a calling convention. The context remembers the coefficients it was
/// computed with, so it cannot be paired with a different calibration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompensationContext {
    pub(crate) b5: i32,
    pub(crate) calibration: Calibration,
    pub(crate) generation: u16,
}

impl CompensationContext {
    /// The raw B5 intermediate, for diagnostics.
    pub fn b5(&self) -> i32 {
        self.b5
    }

    /// Whether this context was computed with `calibration`.
    pub fn matches(&self, calibration: &Calibration) -> bool {
        self.calibration == *calibration
    }
}

/// A compensated temperature together with the context needed to compensate a pressure reading.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    pub(crate) deci_celsius: i32,
    pub(crate) context: CompensationContext,
}

impl Temperature {
    /// Temperature in degrees Celsius, with 0.1 °C resolution.
    pub fn celsius(&self) -> f32 {
        self.deci_celsius as f32 / 10.0
    }

    /// Temperature in units of 0.1 °C, e.g. 150 for 15.0 °C.
    pub fn deci_celsius(&self) -> i32 {
        self.deci_celsius
    }

    pub fn context(&self) -> CompensationContext {
        self.context
    }
}

impl Calibration {
    /// Compensates a raw temperature reading (UT).
    ///
    /// Returns [`None`] if the coefficients make the formula divide by zero.
    pub fn compensate_temperature(&self, raw: u16) -> Option<Temperature> {
        let x1 = (i32::from(raw) - i32::from(self.ac6)).wrapping_mul(i32::from(self.ac5)) >> 15;
        let x2 = (i32::from(self.mc) << 11).checked_div(x1.wrapping_add(i32::from(self.md)))?;
        let b5 = x1.wrapping_add(x2);

        Some(Temperature {
            deci_celsius: b5.wrapping_add(8) >> 4,
            context: CompensationContext { b5, calibration: *self, generation: 0 },
        })
    }

    /// Compensates a raw pressure reading (UP) into Pascal.
    ///
    /// `raw` must have been converted with the same `oversampling`, and `context` must come from
    /// a temperature compensated with these coefficients.
    ///
    /// Returns [`None`] if the coefficients make the formula divide by zero.
    pub fn compensate_pressure(
        &self,
        raw: u32,
        context: &CompensationContext,
        oversampling: Oversampling,
    ) -> Option<i32> {
        let oss = oversampling.oss();

        let b6 = context.b5.wrapping_sub(4000);
        let b6_squared = b6.wrapping_mul(b6) >> 12;

        let x1 = i32::from(self.b2).wrapping_mul(b6_squared) >> 11;
        let x2 = i32::from(self.ac2).wrapping_mul(b6) >> 11;
        let x3 = x1.wrapping_add(x2);
        let b3 = ((i32::from(self.ac1) * 4).wrapping_add(x3) << oss).wrapping_add(2) >> 2;

        let x1 = i32::from(self.ac3).wrapping_mul(b6) >> 13;
        let x2 = i32::from(self.b1).wrapping_mul(b6_squared) >> 16;
        let x3 = x1.wrapping_add(x2).wrapping_add(2) >> 2;
        let b4 = u32::from(self.ac4).wrapping_mul((x3 as u32).wrapping_add(32768)) >> 15;

        let b7 = ((raw as i32).wrapping_sub(b3) as u32).wrapping_mul(50000 >> oss);

        // Shifting b7 left first keeps one more bit of precision, but only while it cannot overflow.
        let p = if b7 < 0x8000_0000 {
            (b7 << 1).checked_div(b4)?
        } else {
            b7.checked_div(b4)? << 1
        } as i32;

        let x1 = (p >> 8).wrapping_mul(p >> 8);
        let x1 = x1.wrapping_mul(3038) >> 16;
        let x2 = (-7357i32).wrapping_mul(p) >> 16;

        Some(p.wrapping_add(x1.wrapping_add(x2).wrapping_add(3791) >> 4))
    }
}
