//! Word-wide register access for the TMP102.
//!
//! Every TMP102 register is 16 bits, so there are exactly two transaction
//! shapes: `[pointer, msb, lsb]` written in one go, and the pointer
//! followed by a repeated-start read of two bytes.

use embedded_hal_async::i2c::I2c;
use transducer::Register;

use crate::error::Tmp102Error;
use crate::registers::{DeviceAddress, RegisterAddress};

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

    pub fn release(self) -> I2C {
        self.i2c
    }

    pub async fn read_word(
        &mut self,
        register: RegisterAddress,
    ) -> Result<[u8; 2], Tmp102Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address.into(), &[register.address()], &mut buf)
            .await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("read {} <- {=[u8]:x}", register, &buf[..]);

        Ok(buf)
    }

    pub async fn write_word(
        &mut self,
        register: RegisterAddress,
        value: [u8; 2],
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        let [msb, lsb] = value;

        #[cfg(feature = "defmt")]
        defmt::trace!("write {} -> {=[u8]:x}", register, &value[..]);

        self.i2c
            .write(self.address.into(), &[register.address(), msb, lsb])
            .await?;
        Ok(())
    }
}
