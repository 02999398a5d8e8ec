pub use crate::register::ctrl_meas::Oversampling;

/// How the driver waits for a conversion to finish.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionWait {
    /// Always wait the worst-case conversion time: 5 ms for temperature,
    /// `2 + (3 << oss)` ms for pressure.
    #[default]
    FixedDelay,

    /// Wait 1 ms at a time and read CTRL_MEAS until the start-of-conversion bit clears.
    ///
    /// Fails with [`crate::Bmp085Error::Timeout`] if the bit is still set after `max_polls` polls.
    /// A `max_polls` of 0 is treated as 1.
    PollEndOfConversion { max_polls: u8 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub(crate) oversampling: Oversampling,
    pub(crate) conversion_wait: ConversionWait,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            oversampling: Oversampling::UltraLowPower,
            conversion_wait: ConversionWait::FixedDelay,
        }
    }
}

impl Configuration {
    /// Sets the pressure oversampling setting.
    ///
    /// It is fixed for the lifetime of the driver, since compensated pressure depends on it.
    pub fn oversampling(mut self, oversampling: Oversampling) -> Self {
        self.oversampling = oversampling;

        self
    }

    pub fn conversion_wait(mut self, conversion_wait: ConversionWait) -> Self {
        self.conversion_wait = conversion_wait;

        self
    }
}
