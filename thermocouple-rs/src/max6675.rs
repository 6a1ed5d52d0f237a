//! MAX6675 cold-junction-compensated K-type thermocouple converter.
//!
//! One 16-bit big-endian frame per read:
//!
//! ```text
//!  15    14 ........ 3    2         1     0
//! [0] [temperature, 12 bit] [OPEN] [ID=0] [Z]
//! ```

use embedded_hal_async::spi::SpiDevice;
use transducer::{Celsius, FixedPoint, TemperatureSensor};

use crate::error::ThermocoupleError;

/// Unsigned 12-bit code above three status bits, 0.25 °C per step. Bit 15
/// is always zero so the signed decode yields the same value.
const FORMAT: FixedPoint = FixedPoint::new(3, 4.0);

const OPEN_INPUT: u16 = 1 << 2;

/// Async driver for the MAX6675.
pub struct Max6675<SPI> {
    spi: SPI,
}

impl<SPI> Max6675<SPI>
where
    SPI: SpiDevice,
{
    /// Create a new driver. No SPI traffic is generated.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give the SPI device back.
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Read one raw frame.
    pub async fn read_raw(&mut self) -> Result<u16, ThermocoupleError<SPI::Error>> {
        let mut buf = [0u8; 2];
        self.spi.read(&mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read the thermocouple temperature.
    ///
    /// # Errors
    /// * [`ThermocoupleError::OpenCircuit`] if no thermocouple is attached
    /// * [`ThermocoupleError::Spi`] on communication failure
    pub async fn read_celsius(&mut self) -> Result<Celsius, ThermocoupleError<SPI::Error>> {
        let frame = self.read_raw().await?;
        if frame & OPEN_INPUT != 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("MAX6675 thermocouple input open");
            return Err(ThermocoupleError::OpenCircuit);
        }
        Ok(FORMAT.decode(frame))
    }
}

impl<SPI> TemperatureSensor for Max6675<SPI>
where
    SPI: SpiDevice,
{
    type Error = ThermocoupleError<SPI::Error>;

    async fn read_celsius(&mut self) -> Result<Celsius, Self::Error> {
        Max6675::read_celsius(self).await
    }
}
