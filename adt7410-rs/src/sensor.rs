//! High-level interface for the ADT7410.
//!
//! [`Adt7410`] composes the register map, the configuration codec and the
//! temperature codec into ordered bus transactions, and owns the cached copy
//! of the configuration register.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use transducer::{Celsius, TemperatureSensor};

use crate::config::{
    Configuration, CtOutputPolarity, IntOutputPolarity, NumberOfFaults, OperationMode,
    TemperatureDetectionMode,
};
use crate::driver::RegisterDriver;
use crate::error::Adt7410Error;
use crate::registers::{DeviceAddress, RegisterAddress, RESET_DELAY_US};
use crate::status::{ChipId, Status};
use crate::temperature::{
    decode_hysteresis, decode_temperature, encode_hysteresis, encode_temperature, Resolution,
    SETPOINT_RESOLUTION,
};

/// Whether the configuration register has been read into the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigState {
    /// Nothing cached yet; the next operation that needs the configuration
    /// reads it from the device.
    Uninitialized,
    /// The cache mirrors the device register.
    Ready(Configuration),
}

/// Async driver for the ADT7410 temperature sensor.
///
/// # Configuration cache
///
/// The driver keeps a copy of the configuration register. It is filled by
/// [`init`](Self::init) or lazily by the first operation that needs it, and
/// every field setter updates it with a cached read-modify-write: one field
/// of the cache is changed, the whole byte is written, and the cache is
/// replaced only once the write succeeded.
///
/// Changes made to the device by another bus master are **not** detected;
/// the next setter overwrites them with the cached fields. Call
/// [`refresh_config`](Self::refresh_config) to re-read the device.
///
/// # Sharing
///
/// Every operation takes `&mut self`. Callers on different tasks must
/// serialise access externally, e.g. by wrapping the driver in a mutex.
///
/// # Example
///
/// ```no_run
/// use adt7410::{Adt7410, Resolution, DEFAULT_ADDRESS};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut sensor = Adt7410::new(i2c, DEFAULT_ADDRESS);
/// sensor.init().await.unwrap();
/// sensor.set_resolution(Resolution::Bits16).await.unwrap();
///
/// let temperature = sensor.read_celsius().await.unwrap();
/// # }
/// ```
pub struct Adt7410<I2C> {
    driver: RegisterDriver<I2C>,
    state: ConfigState,
    reset_delay: Duration,
}

impl<I2C> Adt7410<I2C>
where
    I2C: I2c,
{
    /// Create a new driver. No I2C traffic is generated.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral (takes ownership for exclusive access)
    /// * `address`: the address selected by the A1/A0 pins
    pub fn new(i2c: I2C, address: DeviceAddress) -> Self {
        Self {
            driver: RegisterDriver::new(i2c, address),
            state: ConfigState::Uninitialized,
            reset_delay: Duration::from_micros(RESET_DELAY_US),
        }
    }

    /// Override the wait used by [`reset_and_wait`](Self::reset_and_wait).
    ///
    /// Values below the 200 µs the device needs are raised to it.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay.max(Duration::from_micros(RESET_DELAY_US));
        self
    }

    /// The bus address this driver talks to.
    pub fn address(&self) -> DeviceAddress {
        self.driver.address()
    }

    /// Current state of the configuration cache.
    pub fn config_state(&self) -> ConfigState {
        self.state
    }

    /// Give the I2C peripheral back, dropping the cached configuration.
    pub fn release(self) -> I2C {
        self.driver.release()
    }

    // -----------------------------------------------------------------------
    // Configuration cache
    // -----------------------------------------------------------------------

    /// Read the configuration register and cache it.
    ///
    /// Optional: every operation that needs the configuration performs this
    /// read on first use.
    pub async fn init(&mut self) -> Result<Configuration, Adt7410Error<I2C::Error>> {
        self.refresh_config().await
    }

    /// Return the cached configuration, reading the device only if nothing
    /// is cached yet.
    pub async fn read_config(&mut self) -> Result<Configuration, Adt7410Error<I2C::Error>> {
        match self.state {
            ConfigState::Ready(config) => Ok(config),
            ConfigState::Uninitialized => self.refresh_config().await,
        }
    }

    /// Re-read the configuration register, replacing the cache.
    pub async fn refresh_config(&mut self) -> Result<Configuration, Adt7410Error<I2C::Error>> {
        let byte = self.driver.read_u8(RegisterAddress::Config).await?;
        let config = Configuration::from_register(byte);

        #[cfg(feature = "defmt")]
        {
            if let ConfigState::Ready(cached) = self.state {
                if cached != config {
                    defmt::warn!("configuration changed outside the driver: {}", config);
                }
            }
        }

        self.state = ConfigState::Ready(config);
        Ok(config)
    }

    /// Write a whole configuration and cache it.
    pub async fn set_config(
        &mut self,
        config: Configuration,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.driver
            .write_u8(RegisterAddress::Config, config.to_register())
            .await?;
        self.state = ConfigState::Ready(config);
        Ok(())
    }

    /// Cached read-modify-write of the configuration register.
    async fn update_config(
        &mut self,
        update: impl FnOnce(Configuration) -> Configuration,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        let config = update(self.read_config().await?);
        self.set_config(config).await
    }

    // -----------------------------------------------------------------------
    // Field setters
    // -----------------------------------------------------------------------

    pub async fn set_operation_mode(
        &mut self,
        mode: OperationMode,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.update_config(|c| c.with_operation_mode(mode)).await
    }

    pub async fn set_number_of_faults(
        &mut self,
        number_of_faults: NumberOfFaults,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.update_config(|c| c.with_number_of_faults(number_of_faults))
            .await
    }

    pub async fn set_ct_output_polarity(
        &mut self,
        polarity: CtOutputPolarity,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.update_config(|c| c.with_ct_output_polarity(polarity))
            .await
    }

    pub async fn set_int_output_polarity(
        &mut self,
        polarity: IntOutputPolarity,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.update_config(|c| c.with_int_output_polarity(polarity))
            .await
    }

    pub async fn set_temperature_detection_mode(
        &mut self,
        mode: TemperatureDetectionMode,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.update_config(|c| c.with_temperature_detection_mode(mode))
            .await
    }

    /// Change the ADC resolution. Every later temperature read is decoded
    /// with the new layout.
    pub async fn set_resolution(
        &mut self,
        resolution: Resolution,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.update_config(|c| c.with_resolution(resolution)).await
    }

    // -----------------------------------------------------------------------
    // Read operations
    // -----------------------------------------------------------------------

    /// Read the temperature value register, decoded with the cached
    /// resolution.
    pub async fn read_celsius(&mut self) -> Result<Celsius, Adt7410Error<I2C::Error>> {
        let resolution = self.read_config().await?.resolution;
        let raw = self.driver.read_word(RegisterAddress::TempMsb).await?;
        Ok(decode_temperature(resolution, raw))
    }

    pub async fn read_status(&mut self) -> Result<Status, Adt7410Error<I2C::Error>> {
        let byte = self.driver.read_u8(RegisterAddress::Status).await?;
        Ok(Status::from_register(byte))
    }

    pub async fn read_id(&mut self) -> Result<ChipId, Adt7410Error<I2C::Error>> {
        let byte = self.driver.read_u8(RegisterAddress::Id).await?;
        Ok(ChipId::from_register(byte))
    }

    // -----------------------------------------------------------------------
    // Setpoints
    // -----------------------------------------------------------------------

    /// Set the window that drives the INT pin: T_LOW first, then T_HIGH.
    pub async fn set_int_temperature_range(
        &mut self,
        low: Celsius,
        high: Celsius,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        {
            if low > high {
                defmt::warn!("INT range inverted: low {} > high {}", low, high);
            }
        }

        self.write_setpoint(RegisterAddress::SetpointLowMsb, low)
            .await?;
        self.write_setpoint(RegisterAddress::SetpointHighMsb, high)
            .await
    }

    /// Read back the INT window as `(low, high)`.
    pub async fn read_int_temperature_range(
        &mut self,
    ) -> Result<(Celsius, Celsius), Adt7410Error<I2C::Error>> {
        let low = self.read_setpoint(RegisterAddress::SetpointLowMsb).await?;
        let high = self.read_setpoint(RegisterAddress::SetpointHighMsb).await?;
        Ok((low, high))
    }

    /// Set the T_CRIT limit that drives the CT pin.
    pub async fn set_ct_critical_temperature(
        &mut self,
        critical: Celsius,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.write_setpoint(RegisterAddress::SetpointCritMsb, critical)
            .await
    }

    pub async fn read_ct_critical_temperature(
        &mut self,
    ) -> Result<Celsius, Adt7410Error<I2C::Error>> {
        self.read_setpoint(RegisterAddress::SetpointCritMsb).await
    }

    /// Set the hysteresis applied to all three limits, in whole degrees
    /// from 0 to 15 °C.
    pub async fn set_hysteresis(
        &mut self,
        hysteresis: Celsius,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.driver
            .write_u8(RegisterAddress::SetpointHyst, encode_hysteresis(hysteresis))
            .await
    }

    pub async fn read_hysteresis(&mut self) -> Result<Celsius, Adt7410Error<I2C::Error>> {
        let byte = self.driver.read_u8(RegisterAddress::SetpointHyst).await?;
        Ok(decode_hysteresis(byte))
    }

    async fn write_setpoint(
        &mut self,
        register: RegisterAddress,
        temperature: Celsius,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.driver
            .write_word(
                register,
                encode_temperature(SETPOINT_RESOLUTION, temperature),
            )
            .await
    }

    async fn read_setpoint(
        &mut self,
        register: RegisterAddress,
    ) -> Result<Celsius, Adt7410Error<I2C::Error>> {
        let raw = self.driver.read_word(register).await?;
        Ok(decode_temperature(SETPOINT_RESOLUTION, raw))
    }

    // -----------------------------------------------------------------------
    // Reset
    // -----------------------------------------------------------------------

    /// Issue a software reset.
    ///
    /// Returns as soon as the command is on the bus. The device reloads its
    /// power-on defaults and does not acknowledge for about 200 µs; the
    /// caller must wait before the next transaction, or use
    /// [`reset_and_wait`](Self::reset_and_wait). The configuration cache is
    /// dropped and re-read on next use.
    pub async fn reset(&mut self) -> Result<(), Adt7410Error<I2C::Error>> {
        self.driver.command(RegisterAddress::Reset).await?;
        self.state = ConfigState::Uninitialized;
        Ok(())
    }

    /// [`reset`](Self::reset), then wait the configured reset delay on
    /// `delay`.
    pub async fn reset_and_wait<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Adt7410Error<I2C::Error>> {
        self.reset().await?;
        let micros = u32::try_from(self.reset_delay.as_micros()).unwrap_or(u32::MAX);
        delay.delay_us(micros).await;
        Ok(())
    }
}

impl<I2C> TemperatureSensor for Adt7410<I2C>
where
    I2C: I2c,
{
    type Error = Adt7410Error<I2C::Error>;

    async fn read_celsius(&mut self) -> Result<Celsius, Self::Error> {
        Adt7410::read_celsius(self).await
    }
}
