//! Low-level register access for the ADT7410.
//!
//! Implements the two transaction shapes the device understands: a write of
//! the register pointer followed by up to two data bytes, and a write of the
//! register pointer followed by a repeated-start read.
//!
//! This module is crate-private; consumers interact with [`Adt7410`]
//! in `sensor.rs` instead.
//!
//! [`Adt7410`]: crate::Adt7410

use embedded_hal_async::i2c::I2c;
use transducer::Register;

use crate::error::Adt7410Error;
use crate::registers::{DeviceAddress, RegisterAddress};

/// Largest register payload on this device.
const MAX_PAYLOAD: usize = 2;

/// Low-level register driver.
///
/// Owns the I2C peripheral and the strapped bus address.
pub(crate) struct RegisterDriver<I2C> {
    i2c: I2C,
    address: DeviceAddress,
}

impl<I2C> RegisterDriver<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: DeviceAddress) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Give the I2C peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    // -----------------------------------------------------------------------
    // Core protocol primitives
    // -----------------------------------------------------------------------

    /// Write the register pointer, then read `N` bytes in the same
    /// transaction.
    ///
    /// The buffer length fixes the read count, so the transport either fills
    /// it completely or reports an error.
    pub async fn read<const N: usize>(
        &mut self,
        register: RegisterAddress,
    ) -> Result<[u8; N], Adt7410Error<I2C::Error>> {
        debug_assert_eq!(N, register.width());

        let mut buf = [0u8; N];
        self.i2c
            .write_read(self.address.into(), &[register.address()], &mut buf)
            .await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("read {} <- {=[u8]:x}", register, &buf[..]);

        Ok(buf)
    }

    /// Write the register pointer followed by `payload` in a single
    /// transaction. An empty payload sends only the pointer.
    pub async fn write(
        &mut self,
        register: RegisterAddress,
        payload: &[u8],
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        debug_assert_eq!(payload.len(), register.width());

        // Full write buffer: [pointer, msb, lsb]
        let len = 1 + payload.len().min(MAX_PAYLOAD);
        let mut buf = [0u8; 1 + MAX_PAYLOAD];
        buf[0] = register.address();
        buf[1..len].copy_from_slice(&payload[..len - 1]);

        #[cfg(feature = "defmt")]
        defmt::trace!("write {} -> {=[u8]:x}", register, &buf[1..len]);

        self.i2c.write(self.address.into(), &buf[..len]).await?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Typed read/write helpers
    // -----------------------------------------------------------------------

    pub async fn read_u8(
        &mut self,
        register: RegisterAddress,
    ) -> Result<u8, Adt7410Error<I2C::Error>> {
        let [byte] = self.read::<1>(register).await?;
        Ok(byte)
    }

    pub async fn write_u8(
        &mut self,
        register: RegisterAddress,
        value: u8,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.write(register, &[value]).await
    }

    /// Read a big-endian 16-bit register starting at its MSB address.
    pub async fn read_word(
        &mut self,
        register: RegisterAddress,
    ) -> Result<[u8; 2], Adt7410Error<I2C::Error>> {
        self.read::<2>(register).await
    }

    /// Write a big-endian 16-bit register starting at its MSB address.
    pub async fn write_word(
        &mut self,
        register: RegisterAddress,
        value: [u8; 2],
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.write(register, &value).await
    }

    /// Write a command register that takes no payload.
    pub async fn command(
        &mut self,
        register: RegisterAddress,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.write(register, &[]).await
    }
}
