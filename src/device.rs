//! Register transport: the `Device` abstraction and its I2C implementation

use hal::blocking::i2c;

use crate::Register;

/// MPU's I2C address (AD0 low)
pub const MPU_I2C_ADDR: u8 = 0x68;

/// Bus speed the MPU6886 is specified for; configure the I2C peripheral
/// with it before handing it over.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Longest payload accepted by a single register block write
const MAX_WRITE: usize = 16;

/// Releasable describes a type that can be destroyed
/// with a released asset.
pub trait Releasable {
    /// The type to be released
    type Released;

    /// Release the underlying asset
    fn release(self) -> Self::Released;
}

/// An MPU communication device abstraction
///
/// Register transactions are never retried here; every failure is handed
/// back to the caller.
pub trait Device: Releasable {
    /// The type of error for all results
    type Error;

    /// Fill `buffer` with consecutive registers starting at `reg`.
    ///
    /// The start register is written without a stop condition, then
    /// `buffer.len()` bytes are read. A transfer that cannot deliver every
    /// byte is an error.
    fn read_many(&mut self,
                 reg: Register,
                 buffer: &mut [u8])
                 -> Result<(), Self::Error>;

    /// Write the provided data block (up to 16 bytes) to consecutive
    /// registers starting at `reg`, terminated with a stop condition
    fn write_many(&mut self,
                  reg: Register,
                  buffer: &[u8])
                  -> Result<(), Self::Error>;

    /// Write the provided value to register
    fn write(&mut self, reg: Register, val: u8) -> Result<(), Self::Error> {
        self.write_many(reg, &[val])
    }

    /// Read a single value from the register
    fn read(&mut self, reg: Register) -> Result<u8, Self::Error> {
        let buffer = &mut [0; 1];
        self.read_many(reg, buffer)?;
        Ok(buffer[0])
    }
}

/// I2C Error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2CError<E> {
    /// Bus io error
    BusError(E),
    /// Internal WriteMany Error when trying to write more than 16 bytes
    WriteManyError,
}

impl<E> core::convert::From<E> for I2CError<E> {
    fn from(error: E) -> Self {
        I2CError::BusError(error)
    }
}

/// An I2C device talking to an MPU6886 at [`MPU_I2C_ADDR`].
///
/// [`MPU_I2C_ADDR`]: ./constant.MPU_I2C_ADDR.html
pub struct I2cDevice<I2C> {
    i2c: I2C,
    address: u8,
}

impl<E, I2C> I2cDevice<I2C>
    where I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>
{
    /// Create a new I2C device at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, MPU_I2C_ADDR)
    }

    /// Create a new I2C device at a custom address (e.g. 0x69 with AD0
    /// pulled high)
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        I2cDevice { i2c,
                    address }
    }
}

impl<E, I2C> Releasable for I2cDevice<I2C>
    where I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>
{
    type Released = I2C;

    fn release(self) -> I2C {
        self.i2c
    }
}

impl<E, I2C> Device for I2cDevice<I2C>
    where I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>
{
    type Error = I2CError<E>;

    fn read_many(&mut self,
                 reg: Register,
                 buffer: &mut [u8])
                 -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[reg.addr()], buffer)?;
        Ok(())
    }

    fn write_many(&mut self,
                  reg: Register,
                  buffer: &[u8])
                  -> Result<(), Self::Error> {
        let size = if buffer.len() <= MAX_WRITE {
            buffer.len()
        } else {
            return Err(I2CError::WriteManyError);
        };
        let mut message: [u8; MAX_WRITE + 1] = [0; MAX_WRITE + 1];
        let message = &mut message[0..size + 1];
        message[0] = reg.addr();
        message[1..].copy_from_slice(&buffer[0..size]);
        self.i2c.write(self.address, message)?;
        Ok(())
    }
}
