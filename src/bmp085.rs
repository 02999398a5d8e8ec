use crate::bus::{BMP085_ADDRESS, Bus, I2c};
use crate::calibration::{Calibration, CompensationContext, Temperature};
use crate::config::{Configuration, ConversionWait, Oversampling};
use crate::error::Bmp085Error;
use crate::register::calibration::{Ac1, Ac2, Ac3, Ac4, Ac5, Ac6, B1, B2, Mb, Mc, Md};
use crate::register::ctrl_meas::{ConversionCommand, CtrlMeas};
use crate::register::out::{OutLsb, OutMsb, OutWord, OutXlsb};
use crate::register::soft_reset::{SoftReset, SoftResetData};
use crate::register::{Readable, Writable, chip_id};
use embedded_hal_async::delay::DelayNs;

/// Type alias for a Bmp085 chip communicating over I2C
pub type Bmp085I2c<T, D> = Bmp085<I2c<T>, D>;

const BMP085_CHIP_ID: u8 = 0x55;

/// Maximum temperature conversion time is 4.5 ms
const TEMPERATURE_CONVERSION_MS: u32 = 5;

/// Start-up time after power-on or soft reset
const STARTUP_MS: u32 = 10;

/// Chip id reads made by `init`, 1 ms apart, spanning the start-up time
const PROBE_ATTEMPTS: u32 = 10;

/// Main Bmp085 driver struct
pub struct Bmp085<B, D> {
    bus: B,
    delay: D,
    config: Configuration,
    calibration: Option<Calibration>,
    generation: u16,
}

/// Type alias used to simplify return types throughout the driver
pub type Bmp085Result<T, BusError> = Result<T, Bmp085Error<BusError>>;

impl<T, D> Bmp085I2c<T, D>
where
    T: embedded_hal_async::i2c::I2c,
    D: DelayNs,
{
    /// Constructs a new, uncalibrated Bmp085 driver instance that communicates over I2C at
    /// address 0x77.
    ///
    /// No bus traffic happens here. Call [`init`](Self::init) or [`calibrate`](Self::calibrate)
    /// before reading temperature or pressure.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal_async::delay::DelayNs;
    /// # use embedded_hal_async::i2c::I2c;
    /// # use bmp085_rs::Bmp085Result;
    ///  use bmp085_rs::Bmp085;
    ///  use bmp085_rs::config::{Configuration, Oversampling};
    /// # async fn demo<I: I2c, D: DelayNs>(i2c: I, delay: D) -> Bmp085Result<(), I::Error> {
    ///
    ///  let mut device = Bmp085::new_i2c(
    ///     i2c,
    ///     delay,
    ///     Configuration::default().oversampling(Oversampling::Standard),
    ///  );
    ///  device.init().await?;
    ///
    ///  let temperature = device.temperature().await?;
    ///  let pressure = device.pressure(&temperature.context()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c(i2c: T, delay: D, config: Configuration) -> Self {
        Self::new(I2c::new(i2c, BMP085_ADDRESS), delay, config)
    }
}

impl<B, D> Bmp085<B, D>
where
    B: Bus,
    D: DelayNs,
{
    /// Creates a new, uncalibrated instance of the driver on top of any [`Bus`].
    pub fn new(bus: B, delay: D, config: Configuration) -> Self {
        Self {
            bus,
            delay,
            config,
            calibration: None,
            generation: 0,
        }
    }

    /// Probes if the device is ready by attempting to read ChipId `attempts` times with a 1 ms delay.
    ///
    /// Returns [`Bmp085Error::NotConnected`] if no valid response is received.
    async fn probe_ready(&mut self, attempts: u32) -> Bmp085Result<(), B::Error> {
        for _ in 0..attempts {
            if let Ok(id) = self.bus.read::<chip_id::ChipId>().await {
                if id == BMP085_CHIP_ID {
                    return Ok(());
                }
            }

            self.delay.delay_ms(1).await;
        }

        Err(Bmp085Error::NotConnected)
    }

    /// Waits for the device to answer and loads the calibration coefficients.
    ///
    /// This function will:
    /// - Probe for a connected BMP085 device, up to 10 times 1 ms apart (its start-up time).
    /// - Load calibration coefficients from EEPROM, see [`calibrate`](Self::calibrate).
    pub async fn init(&mut self) -> Bmp085Result<(), B::Error> {
        self.probe_ready(PROBE_ATTEMPTS).await?;
        self.calibrate().await
    }

    /// Reads the 11 calibration coefficients from EEPROM (0xAA - 0xBF).
    ///
    /// Every coefficient is fetched with its own 2-byte read, in register order. A word reading
    /// 0x0000 or 0xFFFF means the EEPROM read failed and yields
    /// [`Bmp085Error::InvalidCalibration`]; the previous coefficients are then kept.
    ///
    /// Calling this again is allowed. Any [`CompensationContext`] obtained before a successful
    /// recalibration is rejected by [`pressure`](Self::pressure) afterwards.
    pub async fn calibrate(&mut self) -> Bmp085Result<(), B::Error> {
        let calibration = Calibration {
            ac1: self.read_coefficient::<Ac1>().await? as i16,
            ac2: self.read_coefficient::<Ac2>().await? as i16,
            ac3: self.read_coefficient::<Ac3>().await? as i16,
            ac4: self.read_coefficient::<Ac4>().await?,
            ac5: self.read_coefficient::<Ac5>().await?,
            ac6: self.read_coefficient::<Ac6>().await?,
            b1: self.read_coefficient::<B1>().await? as i16,
            b2: self.read_coefficient::<B2>().await? as i16,
            mb: self.read_coefficient::<Mb>().await? as i16,
            mc: self.read_coefficient::<Mc>().await? as i16,
            md: self.read_coefficient::<Md>().await? as i16,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("bmp085: loaded calibration {}", calibration);

        self.calibration = Some(calibration);
        self.generation = self.generation.wrapping_add(1).max(1);

        Ok(())
    }

    async fn read_coefficient<R: Readable<Out = u16>>(&mut self) -> Bmp085Result<u16, B::Error> {
        let value = self.bus.read::<R>().await?;

        if value == 0x0000 || value == 0xFFFF {
            #[cfg(feature = "defmt")]
            defmt::warn!("bmp085: calibration word {:#x} read as {:#x}", R::ADDR, value);

            return Err(Bmp085Error::InvalidCalibration { register: R::ADDR, value });
        }

        Ok(value)
    }

    /// Returns the loaded calibration coefficients, if [`calibrate`](Self::calibrate) has succeeded.
    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }

    /// The pressure oversampling setting this driver was configured with.
    pub fn oversampling(&self) -> Oversampling {
        self.config.oversampling
    }

    /// Read a register using a **typed marker** from [`crate::register`].
    ///
    /// This is the low-level, register-accurate entry point. The transfer length and address
    /// come from `R::N` and `R::ADDR`.
    ///
    /// # Examples
    /// Read the chip id (0xD0):
    /// ```rust,no_run
    /// # use bmp085_rs::{register, Bmp085, Bmp085Result};
    /// # use bmp085_rs::bus::Bus;
    /// # use embedded_hal_async::delay::DelayNs;
    /// # async fn demo<B: Bus, D: DelayNs>(mut device: Bmp085<B, D>) -> Bmp085Result<(), B::Error> {
    /// let id: u8 = device.read::<register::chip_id::ChipId>().await?;
    /// assert_eq!(id, 0x55);
    /// # Ok(()) }
    /// ```
    pub async fn read<R: Readable>(&mut self) -> Bmp085Result<R::Out, B::Error> {
        self.bus.read::<R>().await
    }

    /// Write a register using a **typed marker** from [`crate::register`].
    ///
    /// Writing [`CtrlMeas`] starts a conversion, but does not wait for it.
    pub async fn write<W: Writable>(&mut self, v: &W::In) -> Bmp085Result<(), B::Error> {
        self.bus.write::<W>(v).await
    }

    /// Reads the ID (0xD0) register.
    pub async fn chip_id(&mut self) -> Bmp085Result<u8, B::Error> {
        self.bus.read::<chip_id::ChipId>().await
    }

    /// Determines if the BMP085 device is connected by reading the [`ChipId`](chip_id::ChipId) (0xD0) register.
    pub async fn is_connected(&mut self) -> Bmp085Result<bool, B::Error> {
        Ok(self.chip_id().await? == BMP085_CHIP_ID)
    }

    /// Triggers a soft reset and waits for the device start-up time.
    ///
    /// The calibration EEPROM is not affected, so loaded coefficients stay valid.
    pub async fn soft_reset(&mut self) -> Bmp085Result<(), B::Error> {
        self.bus.write::<SoftReset>(&SoftResetData::Reset).await?;
        self.delay.delay_ms(STARTUP_MS).await;

        Ok(())
    }

    async fn wait_for_conversion(&mut self, max_time_ms: u32) -> Bmp085Result<(), B::Error> {
        match self.config.conversion_wait {
            ConversionWait::FixedDelay => {
                self.delay.delay_ms(max_time_ms).await;

                Ok(())
            }
            ConversionWait::PollEndOfConversion { max_polls } => {
                // Zero still polls once.
                for _ in 0..max_polls.max(1) {
                    self.delay.delay_ms(1).await;
                    if !self.bus.read::<CtrlMeas>().await?.conversion_running {
                        return Ok(());
                    }
                }

                #[cfg(feature = "defmt")]
                defmt::warn!("bmp085: conversion still running after {} polls", max_polls);

                Err(Bmp085Error::Timeout)
            }
        }
    }

    /// Starts a temperature conversion, waits for it and returns the raw 16-bit result (UT).
    ///
    /// The raw value has no physical meaning on its own. Use [`temperature`](Self::temperature)
    /// for a compensated reading.
    pub async fn read_raw_temperature(&mut self) -> Bmp085Result<u16, B::Error> {
        self.bus.write::<CtrlMeas>(&ConversionCommand::Temperature).await?;
        self.wait_for_conversion(TEMPERATURE_CONVERSION_MS).await?;

        self.bus.read::<OutWord>().await
    }

    /// Starts a pressure conversion at the configured oversampling, waits for it and returns the
    /// raw result (UP), `(MSB << 16 | LSB << 8 | XLSB) >> (8 - oss)`.
    ///
    /// The three result bytes are fetched with three separate single-byte reads.
    pub async fn read_raw_pressure(&mut self) -> Bmp085Result<u32, B::Error> {
        let oversampling = self.config.oversampling;

        self.bus.write::<CtrlMeas>(&ConversionCommand::Pressure(oversampling)).await?;
        self.wait_for_conversion(oversampling.conversion_time_ms()).await?;

        let msb = self.bus.read::<OutMsb>().await?;
        let lsb = self.bus.read::<OutLsb>().await?;
        let xlsb = self.bus.read::<OutXlsb>().await?;

        Ok(u32::from_be_bytes([0, msb, lsb, xlsb]) >> (8 - oversampling.oss()))
    }

    /// Measures and compensates the temperature.
    ///
    /// The returned [`Temperature`] carries a [`CompensationContext`], which
    /// [`pressure`](Self::pressure) needs. Pressure compensation is only as current as the
    /// temperature it was given, so take a new temperature before each pressure reading when the
    /// temperature may have changed.
    pub async fn temperature(&mut self) -> Bmp085Result<Temperature, B::Error> {
        let calibration = self.calibration.ok_or(Bmp085Error::NotCalibrated)?;

        let raw = self.read_raw_temperature().await?;
        let mut temperature = calibration
            .compensate_temperature(raw)
            .ok_or(Bmp085Error::CompensationOverflow)?;
        temperature.context.generation = self.generation;

        Ok(temperature)
    }

    /// Measures and compensates the pressure, in Pascal.
    ///
    /// `context` must come from a [`temperature`](Self::temperature) reading taken after this
    /// driver's most recent calibration, with the coefficients it currently holds. A context from
    /// an earlier calibration, from offline compensation or from a driver with different
    /// coefficients yields [`Bmp085Error::StaleContext`].
    pub async fn pressure(&mut self, context: &CompensationContext) -> Bmp085Result<i32, B::Error> {
        let calibration = self.calibration.ok_or(Bmp085Error::NotCalibrated)?;
        if context.generation != self.generation || !context.matches(&calibration) {
            return Err(Bmp085Error::StaleContext);
        }

        let raw = self.read_raw_pressure().await?;

        calibration
            .compensate_pressure(raw, context, self.config.oversampling)
            .ok_or(Bmp085Error::CompensationOverflow)
    }

    /// Measures temperature, then pressure, and returns both compensated values.
    ///
    /// # Examples
    ///
    /// ```rust, no_run
    /// # use bmp085_rs::{Bmp085, Bmp085Result};
    /// # use bmp085_rs::bus::Bus;
    /// # use embedded_hal_async::delay::DelayNs;
    /// # async fn demo<B: Bus, D: DelayNs>(mut device: Bmp085<B, D>) -> Bmp085Result<(), B::Error> {
    /// let data = device.measure().await?;
    /// println!("{} °C, {} Pa, {} m", data.temperature, data.pressure, data.altitude());
    /// # Ok(()) }
    /// ```
    pub async fn measure(&mut self) -> Bmp085Result<Measurement, B::Error> {
        let temperature = self.temperature().await?;
        let pressure = self.pressure(&temperature.context()).await?;

        Ok(Measurement {
            temperature: temperature.celsius(),
            pressure,
        })
    }
}

/// Holds a compensated temperature and pressure taken back to back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Degrees Celsius
    pub temperature: f32,
    /// Pascal
    pub pressure: i32,
}

impl Measurement {
    /// Altitude in meters above standard sea level, see [`crate::altitude::altitude`].
    pub fn altitude(&self) -> f32 {
        crate::altitude::altitude(self.pressure as f32)
    }
}

#[cfg(feature = "uom")]
impl Measurement {
    pub fn temperature_uom(&self) -> uom::si::f32::ThermodynamicTemperature {
        use uom::si::thermodynamic_temperature::{ThermodynamicTemperature, degree_celsius};
        ThermodynamicTemperature::new::<degree_celsius>(self.temperature)
    }

    pub fn pressure_uom(&self) -> uom::si::f32::Pressure {
        use uom::si::pressure::{Pressure, pascal};
        Pressure::new::<pascal>(self.pressure as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBus, FakeDelay};

    /// Datasheet example coefficients, big-endian, in register order 0xAA..0xBE
    const DATASHEET_WORDS: [[u8; 2]; 11] = [
        [0x01, 0x98], // ac1 = 408
        [0xFF, 0xB8], // ac2 = -72
        [0xC7, 0xD1], // ac3 = -14383
        [0x7F, 0xE5], // ac4 = 32741
        [0x7F, 0xF5], // ac5 = 32757
        [0x5A, 0x71], // ac6 = 23153
        [0x18, 0x2E], // b1 = 6190
        [0x00, 0x04], // b2 = 4
        [0x80, 0x00], // mb = -32768
        [0xDD, 0xF9], // mc = -8711
        [0x0B, 0x34], // md = 2868
    ];

    fn datasheet_bus() -> FakeBus<20> {
        let mut bus: FakeBus<20> = FakeBus::new();
        bus.with_response::<Ac1>(&DATASHEET_WORDS[0]);
        bus.with_response::<Ac2>(&DATASHEET_WORDS[1]);
        bus.with_response::<Ac3>(&DATASHEET_WORDS[2]);
        bus.with_response::<Ac4>(&DATASHEET_WORDS[3]);
        bus.with_response::<Ac5>(&DATASHEET_WORDS[4]);
        bus.with_response::<Ac6>(&DATASHEET_WORDS[5]);
        bus.with_response::<B1>(&DATASHEET_WORDS[6]);
        bus.with_response::<B2>(&DATASHEET_WORDS[7]);
        bus.with_response::<Mb>(&DATASHEET_WORDS[8]);
        bus.with_response::<Mc>(&DATASHEET_WORDS[9]);
        bus.with_response::<Md>(&DATASHEET_WORDS[10]);
        // ut = 27898
        bus.with_response::<OutWord>(&[0x6C, 0xFA]);
        // up = 23843 at oss 0, 0x5D2340 >> (8 - oss) in general
        bus.with_response::<OutMsb>(&[0x5D]);
        bus.with_response::<OutLsb>(&[0x23]);
        bus.with_response::<OutXlsb>(&[0x40]);
        bus
    }

    fn device(config: Configuration) -> Bmp085<FakeBus<20>, FakeDelay> {
        Bmp085::new(datasheet_bus(), FakeDelay::default(), config)
    }

    #[tokio::test]
    async fn bmp085_calibrate_reads_every_coefficient_in_order() {
        let mut device = device(Configuration::default());
        device.calibrate().await.unwrap();

        let expected: [(u8, usize); 11] = [
            (0xAA, 2), (0xAC, 2), (0xAE, 2), (0xB0, 2), (0xB2, 2), (0xB4, 2),
            (0xB6, 2), (0xB8, 2), (0xBA, 2), (0xBC, 2), (0xBE, 2),
        ];
        assert_eq!(&expected[..], &device.bus.reads[..]);
        assert!(device.bus.writes.is_empty());

        let calibration = device.calibration().unwrap();
        assert_eq!(408, calibration.ac1);
        assert_eq!(-72, calibration.ac2);
        assert_eq!(-14383, calibration.ac3);
        assert_eq!(32741, calibration.ac4);
        assert_eq!(32757, calibration.ac5);
        assert_eq!(23153, calibration.ac6);
        assert_eq!(6190, calibration.b1);
        assert_eq!(4, calibration.b2);
        assert_eq!(-32768, calibration.mb);
        assert_eq!(-8711, calibration.mc);
        assert_eq!(2868, calibration.md);
    }

    #[tokio::test]
    async fn bmp085_rejects_blank_calibration_word() {
        let mut device = device(Configuration::default());
        device.bus.with_response::<Ac5>(&[0xFF, 0xFF]);

        let result = device.calibrate().await;
        assert_eq!(Err(Bmp085Error::InvalidCalibration { register: 0xB2, value: 0xFFFF }), result);
        assert!(!device.is_calibrated());

        device.bus.with_response::<B2>(&[0x00, 0x00]);
        device.bus.with_response::<Ac5>(&DATASHEET_WORDS[4]);
        let result = device.calibrate().await;
        assert_eq!(Err(Bmp085Error::InvalidCalibration { register: 0xB8, value: 0x0000 }), result);
    }

    #[tokio::test]
    async fn bmp085_read_raw_temperature() {
        let mut device = device(Configuration::default());

        let raw = device.read_raw_temperature().await.unwrap();

        assert_eq!(27898, raw);
        assert_eq!(&[(0xF4, 0x2E)][..], &device.bus.writes[..]);
        assert_eq!(&[(0xF6, 2)][..], &device.bus.reads[..]);
        assert_eq!(5, device.delay.elapsed_ms());
    }

    #[tokio::test]
    async fn bmp085_read_raw_pressure_for_every_oversampling() {
        let cases = [
            (Oversampling::UltraLowPower, 0x34, 5, 23843),
            (Oversampling::Standard, 0x74, 8, 47686),
            (Oversampling::HighResolution, 0xB4, 14, 95373),
            (Oversampling::UltraHighResolution, 0xF4, 26, 190746),
        ];

        for (oversampling, command, wait_ms, expected) in cases {
            let mut device = device(Configuration::default().oversampling(oversampling));

            let raw = device.read_raw_pressure().await.unwrap();

            assert_eq!(expected, raw);
            assert_eq!(&[(0xF4, command)][..], &device.bus.writes[..]);
            assert_eq!(&[(0xF6, 1), (0xF7, 1), (0xF8, 1)][..], &device.bus.reads[..]);
            assert_eq!(wait_ms, device.delay.elapsed_ms());
        }
    }

    #[tokio::test]
    async fn bmp085_temperature_and_pressure_match_datasheet() {
        let mut device = device(Configuration::default());
        device.calibrate().await.unwrap();

        let temperature = device.temperature().await.unwrap();
        assert_eq!(15.0, temperature.celsius());
        assert_eq!(2400, temperature.context().b5());

        let pressure = device.pressure(&temperature.context()).await.unwrap();
        assert_eq!(69964, pressure);
    }

    #[tokio::test]
    async fn bmp085_pressure_is_consistent_across_oversampling() {
        // The same physical pressure read at a higher resolution compensates to the same value.
        let mut device = device(Configuration::default().oversampling(Oversampling::UltraHighResolution));
        device.calibrate().await.unwrap();

        let measurement = device.measure().await.unwrap();
        assert_eq!(15.0, measurement.temperature);
        assert_eq!(69964, measurement.pressure);
    }

    #[tokio::test]
    async fn bmp085_not_calibrated() {
        let mut device = device(Configuration::default());

        assert_eq!(Err(Bmp085Error::NotCalibrated), device.temperature().await);
        assert_eq!(Err(Bmp085Error::NotCalibrated), device.measure().await);
        assert!(device.bus.reads.is_empty());
        assert!(device.bus.writes.is_empty());
    }

    #[tokio::test]
    async fn bmp085_context_is_stale_after_recalibration() {
        let mut device = device(Configuration::default());
        device.calibrate().await.unwrap();
        let before = device.temperature().await.unwrap().context();

        device.calibrate().await.unwrap();

        assert_eq!(Err(Bmp085Error::StaleContext), device.pressure(&before).await);

        let after = device.temperature().await.unwrap().context();
        assert_eq!(Ok(69964), device.pressure(&after).await);
    }

    #[tokio::test]
    async fn bmp085_context_from_other_driver_is_rejected() {
        let mut first = device(Configuration::default());
        first.calibrate().await.unwrap();

        let mut second = device(Configuration::default());
        second.bus.with_response::<Ac6>(&[0x40, 0x00]);
        second.bus.with_response::<Mc>(&[0xD0, 0x00]);
        second.calibrate().await.unwrap();
        let foreign = second.temperature().await.unwrap().context();
        assert_ne!(2400, foreign.b5());

        assert_eq!(Err(Bmp085Error::StaleContext), first.pressure(&foreign).await);

        let own = first.temperature().await.unwrap().context();
        assert_eq!(Ok(69964), first.pressure(&own).await);
    }

    #[tokio::test]
    async fn bmp085_offline_context_is_rejected() {
        let mut device = device(Configuration::default());
        device.calibrate().await.unwrap();

        let offline = device.calibration().unwrap().compensate_temperature(27898).unwrap();
        assert_eq!(Err(Bmp085Error::StaleContext), device.pressure(&offline.context()).await);
    }

    #[tokio::test]
    async fn bmp085_poll_end_of_conversion() {
        let config = Configuration::default()
            .conversion_wait(ConversionWait::PollEndOfConversion { max_polls: 30 });
        let mut device = device(config);
        device.bus.with_response::<CtrlMeas>(&[0x2E & !0b0010_0000]);

        let raw = device.read_raw_temperature().await.unwrap();

        assert_eq!(27898, raw);
        assert_eq!(&[(0xF4, 1), (0xF6, 2)][..], &device.bus.reads[..]);
        assert_eq!(1, device.delay.elapsed_ms());
    }

    #[tokio::test]
    async fn bmp085_poll_end_of_conversion_timeout() {
        let config = Configuration::default()
            .conversion_wait(ConversionWait::PollEndOfConversion { max_polls: 3 });
        let mut device = device(config);
        device.bus.with_response::<CtrlMeas>(&[0x34 | 0b0010_0000]);

        assert_eq!(Err(Bmp085Error::Timeout), device.read_raw_pressure().await);
        assert_eq!(3, device.bus.reads.len());
        assert_eq!(3, device.delay.elapsed_ms());
    }

    #[tokio::test]
    async fn bmp085_poll_end_of_conversion_zero_polls_once() {
        let config = Configuration::default()
            .conversion_wait(ConversionWait::PollEndOfConversion { max_polls: 0 });
        let mut device = device(config);
        device.bus.with_response::<CtrlMeas>(&[0x2E & !0b0010_0000]);

        assert_eq!(Ok(27898), device.read_raw_temperature().await);
        assert_eq!(&[(0xF4, 1), (0xF6, 2)][..], &device.bus.reads[..]);
        assert_eq!(1, device.delay.elapsed_ms());
    }

    #[tokio::test]
    async fn bmp085_bus_failure_propagates() {
        let mut device = device(Configuration::default());
        device.calibrate().await.unwrap();
        device.bus.fail = true;

        assert_eq!(Err(Bmp085Error::Bus(())), device.temperature().await);
        assert_eq!(Err(Bmp085Error::Bus(())), device.calibrate().await);
        // A failed recalibration keeps the previous coefficients.
        assert!(device.is_calibrated());
    }

    #[tokio::test]
    async fn bmp085_init_probes_chip_id() {
        let mut device = device(Configuration::default());
        device.bus.with_response::<chip_id::ChipId>(&[0x55]);

        device.init().await.unwrap();

        assert!(device.is_calibrated());
        assert_eq!((0xD0, 1), device.bus.reads[0]);
        assert!(device.is_connected().await.unwrap());
    }

    #[tokio::test]
    async fn bmp085_init_not_connected() {
        let mut device = device(Configuration::default());
        device.bus.with_response::<chip_id::ChipId>(&[0x60]);

        assert_eq!(Err(Bmp085Error::NotConnected), device.init().await);
        assert!(!device.is_calibrated());
        assert_eq!(10, device.bus.reads.len());
        assert_eq!(10, device.delay.elapsed_ms());
    }

    #[tokio::test]
    async fn bmp085_soft_reset() {
        let mut device = device(Configuration::default());

        device.soft_reset().await.unwrap();

        assert_eq!(&[(0xE0, 0xB6)][..], &device.bus.writes[..]);
        assert_eq!(10, device.delay.elapsed_ms());
    }

    #[test]
    fn measurement_altitude() {
        let measurement = Measurement { temperature: 15.0, pressure: 101325 };
        assert!(measurement.altitude().abs() < 0.01);
    }
}
