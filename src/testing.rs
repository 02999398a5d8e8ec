use crate::bus::{Bus, MAX_REG_BYTES};
use crate::error::Bmp085Error;
use crate::register::{Readable, Writable};
use embedded_hal_async::delay::DelayNs;
use heapless::{LinearMap, Vec};

#[derive(Debug)]
struct RegisterValue {
    bytes: [u8; MAX_REG_BYTES],
    len: usize,
}

/// In-memory stand-in for the device.
///
/// Reads are answered from responses keyed by register address and transfer length. Every read
/// and write is recorded in order so tests can check the exact bus sequence.
pub struct FakeBus<const N: usize> {
    regs: LinearMap<(u8, usize), RegisterValue, N>,
    pub reads: Vec<(u8, usize), 64>,
    pub writes: Vec<(u8, u8), 16>,
    pub fail: bool,
}

#[derive(Default)]
pub struct FakeDelay {
    pub elapsed_ns: u64,
}

impl FakeDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

impl<const N: usize> FakeBus<N> {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
            reads: Vec::new(),
            writes: Vec::new(),
            fail: false,
        }
    }

    pub fn with_response<R: Readable>(&mut self, data: &[u8]) {
        let mut register_value = [0u8; MAX_REG_BYTES];
        register_value[..data.len()].copy_from_slice(data);
        self.regs.insert((R::ADDR, R::N), RegisterValue { bytes: register_value, len: data.len() }).unwrap();
    }
}

impl<const N: usize> Bus for FakeBus<N> {
    type Error = ();

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Bmp085Error<Self::Error>> {
        if self.fail {
            return Err(Bmp085Error::Bus(()));
        }
        self.reads.push((R::ADDR, R::N)).unwrap();

        if let Some(RegisterValue { bytes, len }) = self.regs.get(&(R::ADDR, R::N)) {
            if *len == R::N {
                return R::decode(&bytes[..R::N]).map_err(Bmp085Error::UnexpectedRegisterData);
            }
        }

        panic!("No mocked value for register 0x{:x} and length {}", R::ADDR, R::N)
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Bmp085Error<Self::Error>> {
        if self.fail {
            return Err(Bmp085Error::Bus(()));
        }

        let mut buffer = [0u8; MAX_REG_BYTES];
        W::encode(v, &mut buffer[..W::N]);
        self.writes.push((W::ADDR, buffer[0])).unwrap();

        Ok(())
    }
}
