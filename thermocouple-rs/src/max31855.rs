//! MAX31855 cold-junction-compensated thermocouple converter.
//!
//! One 32-bit big-endian frame per read:
//!
//! ```text
//!  31 ......... 18  17   16     15 ........ 4   3   2     1     0
//! [thermocouple  ] [-] [FAULT] [internal     ] [-] [SCV] [SCG] [OC]
//! ```
//!
//! Both temperatures are signed and left-aligned in their 16-bit half, so
//! each half decodes with the shared [`FixedPoint`] layout.

use embedded_hal_async::spi::SpiDevice;
use transducer::{Celsius, FixedPoint, TemperatureSensor};

use crate::error::ThermocoupleError;

/// 14-bit thermocouple code in the upper half, 0.25 °C per step.
const THERMOCOUPLE: FixedPoint = FixedPoint::new(2, 4.0);
/// 12-bit cold-junction code in the lower half, 0.0625 °C per step.
const INTERNAL: FixedPoint = FixedPoint::new(4, 16.0);

const FAULT: u32 = 1 << 16;
const SHORT_TO_VCC: u32 = 1 << 2;
const SHORT_TO_GND: u32 = 1 << 1;
const OPEN_CIRCUIT: u32 = 1 << 0;

/// Both temperatures reported in one MAX31855 frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Hot-junction temperature, cold-junction compensated.
    pub thermocouple: Celsius,
    /// Die (cold-junction) temperature.
    pub internal: Celsius,
}

impl Readings {
    /// Decodes a raw frame, reporting the fault bits as errors.
    pub fn from_frame<E>(frame: u32) -> Result<Self, ThermocoupleError<E>> {
        if frame & OPEN_CIRCUIT != 0 {
            return Err(ThermocoupleError::OpenCircuit);
        }
        if frame & SHORT_TO_GND != 0 {
            return Err(ThermocoupleError::ShortToGround);
        }
        if frame & SHORT_TO_VCC != 0 {
            return Err(ThermocoupleError::ShortToVcc);
        }
        if frame & FAULT != 0 {
            return Err(ThermocoupleError::Fault);
        }

        Ok(Self {
            thermocouple: THERMOCOUPLE.decode((frame >> 16) as u16),
            internal: INTERNAL.decode(frame as u16),
        })
    }

    /// Both temperatures in kelvin, as `(thermocouple, internal)`.
    pub fn to_kelvin(self) -> (f32, f32) {
        (self.thermocouple.to_kelvin(), self.internal.to_kelvin())
    }

    /// Both temperatures in degrees Fahrenheit, as `(thermocouple, internal)`.
    pub fn to_fahrenheit(self) -> (f32, f32) {
        (
            self.thermocouple.to_fahrenheit(),
            self.internal.to_fahrenheit(),
        )
    }
}

/// Async driver for the MAX31855.
pub struct Max31855<SPI> {
    spi: SPI,
}

impl<SPI> Max31855<SPI>
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
    pub async fn read_raw(&mut self) -> Result<u32, ThermocoupleError<SPI::Error>> {
        let mut buf = [0u8; 4];
        self.spi.read(&mut buf).await?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Read the thermocouple and cold-junction temperatures.
    ///
    /// # Errors
    /// * [`ThermocoupleError::OpenCircuit`], [`ShortToGround`](ThermocoupleError::ShortToGround),
    ///   [`ShortToVcc`](ThermocoupleError::ShortToVcc) or
    ///   [`Fault`](ThermocoupleError::Fault) when the fault bit is set
    /// * [`ThermocoupleError::Spi`] on communication failure
    pub async fn read_both(&mut self) -> Result<Readings, ThermocoupleError<SPI::Error>> {
        let frame = self.read_raw().await?;
        let readings = Readings::from_frame(frame);

        #[cfg(feature = "defmt")]
        {
            if readings.is_err() {
                defmt::warn!("MAX31855 fault, frame {=u32:#x}", frame);
            }
        }

        readings
    }

    /// Read the thermocouple temperature.
    pub async fn read_celsius(&mut self) -> Result<Celsius, ThermocoupleError<SPI::Error>> {
        Ok(self.read_both().await?.thermocouple)
    }
}

impl<SPI> TemperatureSensor for Max31855<SPI>
where
    SPI: SpiDevice,
{
    type Error = ThermocoupleError<SPI::Error>;

    async fn read_celsius(&mut self) -> Result<Celsius, Self::Error> {
        Max31855::read_celsius(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    fn frame(bytes: [u8; 4]) -> [SpiTransaction<u8>; 3] {
        [
            SpiTransaction::transaction_start(),
            SpiTransaction::read_vec(bytes.to_vec()),
            SpiTransaction::transaction_end(),
        ]
    }

    #[test]
    fn decodes_positive_frame() {
        let readings = Readings::from_frame::<()>(0x0640_1900).unwrap();
        assert_eq!(readings.thermocouple, Celsius(100.0));
        assert_eq!(readings.internal, Celsius(25.0));
    }

    #[test]
    fn decodes_negative_frame() {
        let readings = Readings::from_frame::<()>(0xF060_EC00).unwrap();
        assert_eq!(readings.thermocouple, Celsius(-250.0));
        assert_eq!(readings.internal, Celsius(-20.0));
    }

    #[test]
    fn fault_bits_map_to_errors() {
        assert_eq!(
            Readings::from_frame::<()>(0x0001_0001),
            Err(ThermocoupleError::OpenCircuit)
        );
        assert_eq!(
            Readings::from_frame::<()>(0x0001_0002),
            Err(ThermocoupleError::ShortToGround)
        );
        assert_eq!(
            Readings::from_frame::<()>(0x0001_0004),
            Err(ThermocoupleError::ShortToVcc)
        );
        assert_eq!(
            Readings::from_frame::<()>(0x0001_0000),
            Err(ThermocoupleError::Fault)
        );
    }

    #[test]
    fn reads_both_over_spi() {
        let mut probe = Max31855::new(SpiMock::new(&frame([0x06, 0x40, 0x19, 0x00])));
        assert_eq!(
            block_on(probe.read_both()),
            Ok(Readings {
                thermocouple: Celsius(100.0),
                internal: Celsius(25.0),
            })
        );
        probe.release().done();
    }

    #[test]
    fn both_readings_convert_to_derived_scales() {
        let mut probe = Max31855::new(SpiMock::new(&frame([0x06, 0x40, 0x19, 0x00])));
        let readings = block_on(probe.read_both()).unwrap();
        assert_eq!(readings.to_kelvin(), (373.15, 298.15));
        assert_eq!(readings.to_fahrenheit(), (212.0, 77.0));
        probe.release().done();
    }

    #[test]
    fn read_celsius_reports_thermocouple() {
        let mut probe = Max31855::new(SpiMock::new(&frame([0x01, 0x90, 0x00, 0x00])));
        // 0x0190 >> 2 = 100 quarter degrees
        assert_eq!(block_on(probe.read_celsius()), Ok(Celsius(25.0)));
        probe.release().done();
    }

    #[test]
    fn open_circuit_over_spi() {
        let mut probe = Max31855::new(SpiMock::new(&frame([0x00, 0x01, 0x19, 0x01])));
        assert_eq!(
            block_on(probe.read_fahrenheit()),
            Err(ThermocoupleError::OpenCircuit)
        );
        probe.release().done();
    }
}
