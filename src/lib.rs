//! Async `no_std` driver for the Bosch BMP085 (and pin-compatible BMP180) barometric pressure and
//! temperature sensor, built on the [`embedded-hal-async`] traits.
//!
//! The driver loads the factory calibration coefficients, triggers single conversions, waits out
//! the conversion time and compensates the raw readings with the datasheet's fixed-point
//! algorithm.
//!
//! Pressure compensation depends on an intermediate value produced by temperature compensation.
//! [`Bmp085::temperature`] hands that value back as a [`CompensationContext`], and
//! [`Bmp085::pressure`] takes it as an argument:
//!
//! ```rust,no_run
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::i2c::I2c;
//! use bmp085_rs::{altitude, Bmp085, Bmp085Result};
//! use bmp085_rs::config::Configuration;
//! # async fn demo<I: I2c, D: DelayNs>(i2c: I, delay: D) -> Bmp085Result<(), I::Error> {
//!
//! let mut device = Bmp085::new_i2c(i2c, delay, Configuration::default());
//! device.init().await?;
//!
//! let temperature = device.temperature().await?;
//! let pressure = device.pressure(&temperature.context()).await?;
//! println!("{} °C, {} Pa, {} m", temperature.celsius(), pressure, altitude::altitude(pressure as f32));
//! # Ok(()) }
//! ```
//!
//! ## Features
//!
//! - `defmt`: derives `defmt::Format` on public types and logs calibration and timeout events.
//! - `uom`: typed units on [`Measurement`].
//!
//! [`embedded-hal-async`]: https://docs.rs/embedded-hal-async

#![no_std]

pub mod altitude;
pub mod bus;
pub mod calibration;
pub mod config;
pub mod error;
pub mod register;
mod bmp085;

#[cfg(test)]
mod testing;

pub use bmp085::{Bmp085, Bmp085I2c, Bmp085Result, Measurement};
pub use calibration::{Calibration, CompensationContext, Temperature};
pub use error::Bmp085Error;
