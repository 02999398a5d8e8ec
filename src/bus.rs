use crate::error::Bmp085Error;
use crate::register::{Readable, Writable};
use embedded_hal::i2c::SevenBitAddress;

/// Largest register block transferred in one go (a 16-bit word). Markers with a larger `N` fail
/// to compile when used with [`I2c`].
pub(crate) const MAX_REG_BYTES: usize = 2;

/// I2C address of the BMP085. It is fixed in silicon.
pub const BMP085_ADDRESS: SevenBitAddress = 0x77;

/// The narrow transport the driver needs: typed register reads and writes.
///
/// [`I2c`] implements it on top of any [`embedded_hal_async::i2c::I2c`]. Implement it yourself
/// to put the driver on a different transport.
pub trait Bus {
    type Error;

    fn read<R: Readable>(&mut self) -> impl Future<Output = Result<R::Out, Bmp085Error<Self::Error>>>;

    fn write<W: Writable>(&mut self, v: &W::In) -> impl Future<Output = Result<(), Bmp085Error<Self::Error>>>;
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: SevenBitAddress,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    type Error = <I2cType as embedded_hal_async::i2c::ErrorType>::Error;

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Bmp085Error<Self::Error>> {
        const { assert!(R::N <= MAX_REG_BYTES, "register block larger than MAX_REG_BYTES") };
        let mut buffer = [0u8; MAX_REG_BYTES];

        // Address write and data read are separate transactions, with a stop in between.
        self.i2c.write(self.address, &[R::ADDR])
            .await
            .map_err(Bmp085Error::Bus)?;
        self.i2c.read(self.address, &mut buffer[..R::N])
            .await
            .map_err(Bmp085Error::Bus)?;

        R::decode(&buffer[..R::N]).map_err(Bmp085Error::UnexpectedRegisterData)
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Bmp085Error<Self::Error>> {
        const { assert!(W::N <= MAX_REG_BYTES, "register block larger than MAX_REG_BYTES") };
        let mut buffer = [0u8; MAX_REG_BYTES + 1];
        buffer[0] = W::ADDR;
        W::encode(v, &mut buffer[1..=W::N]);

        self.i2c.write(self.address, &buffer[..=W::N])
            .await
            .map_err(Bmp085Error::Bus)
    }
}
