//! Barometric altitude using the international standard atmosphere.
//!
//! These are pure functions with no device access. The caller is responsible for passing a
//! physically valid (positive) pressure: a negative pressure makes the power function return NaN.

use libm::powf;

/// Standard atmosphere pressure at sea level, in Pascal.
pub const SEA_LEVEL_PRESSURE_PA: f32 = 101_325.0;

const EXPONENT: f32 = 5.25588;
const LAPSE_FACTOR: f32 = 0.0000225577;

/// Altitude in meters above sea level for a pressure in Pascal, referenced to
/// [`SEA_LEVEL_PRESSURE_PA`].
pub fn altitude(pressure_pa: f32) -> f32 {
    altitude_with_reference(pressure_pa, SEA_LEVEL_PRESSURE_PA)
}

/// Altitude in meters relative to the level where the pressure is `reference_pa`.
///
/// Pass the current local sea-level pressure (QNH) for a more accurate absolute altitude, or a
/// pressure taken on the ground for height above ground.
pub fn altitude_with_reference(pressure_pa: f32, reference_pa: f32) -> f32 {
    (1.0 - powf(pressure_pa / reference_pa, 1.0 / EXPONENT)) / LAPSE_FACTOR
}

/// Pressure at sea level, in Pascal, for a pressure measured at a known altitude.
///
/// Inverse of [`altitude_with_reference`].
pub fn sea_level_pressure(pressure_pa: f32, altitude_m: f32) -> f32 {
    pressure_pa / powf(1.0 - altitude_m * LAPSE_FACTOR, EXPONENT)
}
