//! High-level interface for the TMP102.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use transducer::{Celsius, TemperatureSensor};

use crate::config::{
    AlertPolarity, Configuration, ConversionRate, NumberOfFaults, OperationMode, ThermostatMode,
    ONE_SHOT,
};
use crate::driver::RegisterDriver;
use crate::error::Tmp102Error;
use crate::registers::{DeviceAddress, RegisterAddress, CONVERSION_TIME_MS};
use crate::temperature::{decode_temperature, encode_temperature, Resolution};

/// Whether the configuration register has been read into the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigState {
    Uninitialized,
    Ready(Configuration),
}

/// Async driver for the TMP102 temperature sensor.
///
/// The writable configuration fields are cached after the first read, and
/// setters rewrite both configuration bytes from the cache. The cached
/// [`Resolution`] selects the layout for the conversion result and for the
/// T_LOW/T_HIGH limits.
///
/// The driver owns a [`DelayNs`] to wait for one-shot conversions while the
/// sensor is shut down.
pub struct Tmp102<I2C, D> {
    driver: RegisterDriver<I2C>,
    delay: D,
    state: ConfigState,
    conversion_time: Duration,
}

impl<I2C, D> Tmp102<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new driver. No I2C traffic is generated.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral
    /// * `delay`: used to wait for one-shot conversions
    /// * `address`: the address selected by the ADD0 pin
    pub fn new(i2c: I2C, delay: D, address: DeviceAddress) -> Self {
        Self {
            driver: RegisterDriver::new(i2c, address),
            delay,
            state: ConfigState::Uninitialized,
            conversion_time: Duration::from_millis(CONVERSION_TIME_MS),
        }
    }

    /// Override the one-shot conversion wait. Values below the typical
    /// 26 ms conversion time are raised to it.
    pub fn with_conversion_time(mut self, conversion_time: Duration) -> Self {
        self.conversion_time = conversion_time.max(Duration::from_millis(CONVERSION_TIME_MS));
        self
    }

    pub fn address(&self) -> DeviceAddress {
        self.driver.address()
    }

    pub fn config_state(&self) -> ConfigState {
        self.state
    }

    /// Give back the I2C peripheral and the delay.
    pub fn release(self) -> (I2C, D) {
        (self.driver.release(), self.delay)
    }

    // -----------------------------------------------------------------------
    // Configuration cache
    // -----------------------------------------------------------------------

    /// Read the configuration register and cache it.
    pub async fn init(&mut self) -> Result<Configuration, Tmp102Error<I2C::Error>> {
        self.refresh_config().await
    }

    /// Return the cached configuration, reading the device only if nothing
    /// is cached yet.
    pub async fn read_config(&mut self) -> Result<Configuration, Tmp102Error<I2C::Error>> {
        match self.state {
            ConfigState::Ready(config) => Ok(config),
            ConfigState::Uninitialized => self.refresh_config().await,
        }
    }

    /// Re-read the configuration register, replacing the cache.
    pub async fn refresh_config(&mut self) -> Result<Configuration, Tmp102Error<I2C::Error>> {
        let raw = self.driver.read_word(RegisterAddress::Config).await?;
        let config = Configuration::from_register(raw);
        self.state = ConfigState::Ready(config);
        Ok(config)
    }

    /// Write a whole configuration and cache it.
    pub async fn set_config(
        &mut self,
        config: Configuration,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.driver
            .write_word(RegisterAddress::Config, config.to_register())
            .await?;
        self.state = ConfigState::Ready(config);
        Ok(())
    }

    async fn update_config(
        &mut self,
        update: impl FnOnce(Configuration) -> Configuration,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        let config = update(self.read_config().await?);
        self.set_config(config).await
    }

    // -----------------------------------------------------------------------
    // Field setters
    // -----------------------------------------------------------------------

    /// Power down between conversions. Later reads trigger a one-shot
    /// conversion and wait for it.
    pub async fn shutdown(&mut self) -> Result<(), Tmp102Error<I2C::Error>> {
        self.update_config(|c| c.with_operation_mode(OperationMode::Shutdown))
            .await
    }

    /// Resume continuous conversions.
    pub async fn wakeup(&mut self) -> Result<(), Tmp102Error<I2C::Error>> {
        self.update_config(|c| c.with_operation_mode(OperationMode::Continuous))
            .await
    }

    pub async fn set_thermostat_mode(
        &mut self,
        mode: ThermostatMode,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.update_config(|c| c.with_thermostat_mode(mode)).await
    }

    pub async fn set_alert_polarity(
        &mut self,
        polarity: AlertPolarity,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.update_config(|c| c.with_alert_polarity(polarity))
            .await
    }

    pub async fn set_number_of_faults(
        &mut self,
        number_of_faults: NumberOfFaults,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.update_config(|c| c.with_number_of_faults(number_of_faults))
            .await
    }

    /// Switch between normal and extended mode.
    ///
    /// The device does not convert the stored limits, so they are read in
    /// the new layout afterwards. Program the limits again after switching.
    pub async fn set_resolution(
        &mut self,
        resolution: Resolution,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.update_config(|c| c.with_resolution(resolution)).await
    }

    pub async fn set_conversion_rate(
        &mut self,
        rate: ConversionRate,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.update_config(|c| c.with_conversion_rate(rate)).await
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Read the temperature.
    ///
    /// When the cached mode is [`OperationMode::Shutdown`] this first sets
    /// the OS bit and waits the conversion time.
    pub async fn read_celsius(&mut self) -> Result<Celsius, Tmp102Error<I2C::Error>> {
        let config = self.read_config().await?;

        if config.operation_mode == OperationMode::Shutdown {
            let [msb, lsb] = config.to_register();
            self.driver
                .write_word(RegisterAddress::Config, [msb | ONE_SHOT, lsb])
                .await?;
            let micros = u32::try_from(self.conversion_time.as_micros()).unwrap_or(u32::MAX);
            self.delay.delay_us(micros).await;
        }

        let raw = self.driver.read_word(RegisterAddress::Temperature).await?;
        Ok(decode_temperature(config.resolution, raw))
    }

    /// Whether the thermostat currently signals an alert on the ALERT pin.
    ///
    /// Reads the configuration register without touching the cache.
    pub async fn read_alert(&mut self) -> Result<bool, Tmp102Error<I2C::Error>> {
        let raw = self.driver.read_word(RegisterAddress::Config).await?;
        Ok(Configuration::alert_active(raw))
    }

    // -----------------------------------------------------------------------
    // Limits
    // -----------------------------------------------------------------------

    /// Set T_LOW then T_HIGH, encoded in the cached resolution.
    pub async fn set_alert_temperature_range(
        &mut self,
        low: Celsius,
        high: Celsius,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        {
            if low > high {
                defmt::warn!("alert range inverted: low {} > high {}", low, high);
            }
        }

        self.set_low_temperature(low).await?;
        self.set_high_temperature(high).await
    }

    /// Read back `(T_LOW, T_HIGH)`.
    pub async fn read_alert_temperature_range(
        &mut self,
    ) -> Result<(Celsius, Celsius), Tmp102Error<I2C::Error>> {
        let low = self.read_low_temperature().await?;
        let high = self.read_high_temperature().await?;
        Ok((low, high))
    }

    pub async fn set_low_temperature(
        &mut self,
        low: Celsius,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.write_limit(RegisterAddress::LowLimit, low).await
    }

    pub async fn read_low_temperature(&mut self) -> Result<Celsius, Tmp102Error<I2C::Error>> {
        self.read_limit(RegisterAddress::LowLimit).await
    }

    pub async fn set_high_temperature(
        &mut self,
        high: Celsius,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        self.write_limit(RegisterAddress::HighLimit, high).await
    }

    pub async fn read_high_temperature(&mut self) -> Result<Celsius, Tmp102Error<I2C::Error>> {
        self.read_limit(RegisterAddress::HighLimit).await
    }

    async fn write_limit(
        &mut self,
        register: RegisterAddress,
        temperature: Celsius,
    ) -> Result<(), Tmp102Error<I2C::Error>> {
        let resolution = self.read_config().await?.resolution;
        self.driver
            .write_word(register, encode_temperature(resolution, temperature))
            .await
    }

    async fn read_limit(
        &mut self,
        register: RegisterAddress,
    ) -> Result<Celsius, Tmp102Error<I2C::Error>> {
        let resolution = self.read_config().await?.resolution;
        let raw = self.driver.read_word(register).await?;
        Ok(decode_temperature(resolution, raw))
    }
}

impl<I2C, D> TemperatureSensor for Tmp102<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = Tmp102Error<I2C::Error>;

    async fn read_celsius(&mut self) -> Result<Celsius, Self::Error> {
        Tmp102::read_celsius(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x48;

    /// Delay that only records how long it was asked to wait.
    #[derive(Default)]
    struct RecordingDelay {
        total_ns: u64,
    }

    impl DelayNs for RecordingDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    fn sensor(expectations: &[I2cTransaction]) -> Tmp102<I2cMock, RecordingDelay> {
        Tmp102::new(
            I2cMock::new(expectations),
            RecordingDelay::default(),
            DeviceAddress::Gnd,
        )
    }

    /// Check that every expectation was consumed and return the total delay.
    fn finish(sensor: Tmp102<I2cMock, RecordingDelay>) -> u64 {
        let (mut i2c, delay) = sensor.release();
        i2c.done();
        delay.total_ns
    }

    fn config_read(msb: u8, lsb: u8) -> I2cTransaction {
        I2cTransaction::write_read(ADDR, vec![0x01], vec![msb, lsb])
    }

    fn config_write(msb: u8, lsb: u8) -> I2cTransaction {
        I2cTransaction::write(ADDR, vec![0x01, msb, lsb])
    }

    fn temp_read(msb: u8, lsb: u8) -> I2cTransaction {
        I2cTransaction::write_read(ADDR, vec![0x00], vec![msb, lsb])
    }

    // ── Temperature reads ────────────────────────────────────────────

    #[test]
    fn first_read_caches_configuration() {
        let mut sensor = sensor(&[
            config_read(0x60, 0xA0),
            temp_read(0x19, 0x00),
            temp_read(0xE7, 0x00),
        ]);
        assert_eq!(block_on(sensor.read_celsius()), Ok(Celsius(25.0)));
        assert_eq!(
            sensor.config_state(),
            ConfigState::Ready(Configuration::default())
        );
        assert_eq!(block_on(sensor.read_celsius()), Ok(Celsius(-25.0)));
        assert_eq!(finish(sensor), 0);
    }

    #[test]
    fn extended_mode_read() {
        let mut sensor = sensor(&[config_read(0x60, 0xB0), temp_read(0x4B, 0x01)]);
        assert_eq!(block_on(sensor.read_celsius()), Ok(Celsius(150.0)));
        finish(sensor);
    }

    #[test]
    fn shutdown_read_triggers_one_shot_and_waits() {
        let mut sensor = sensor(&[
            config_read(0x61, 0xA0),
            config_write(0x81, 0x80),
            temp_read(0x19, 0x00),
            config_write(0x81, 0x80),
            temp_read(0x19, 0x10),
        ]);
        assert_eq!(block_on(sensor.read_celsius()), Ok(Celsius(25.0)));
        assert_eq!(block_on(sensor.read_celsius()), Ok(Celsius(25.0625)));
        assert_eq!(finish(sensor), 2 * 26_000_000);
    }

    #[test]
    fn conversion_time_is_configurable_but_not_below_typical() {
        let one_shot = [
            config_read(0x61, 0x80),
            config_write(0x81, 0x80),
            temp_read(0x00, 0x00),
        ];

        let mut slow = sensor(&one_shot).with_conversion_time(Duration::from_millis(35));
        block_on(slow.read_celsius()).unwrap();
        assert_eq!(finish(slow), 35_000_000);

        let mut fast = sensor(&one_shot).with_conversion_time(Duration::from_millis(5));
        block_on(fast.read_celsius()).unwrap();
        assert_eq!(finish(fast), 26_000_000);
    }

    #[test]
    fn derived_scale_via_temperature_sensor() {
        let mut sensor = sensor(&[config_read(0x60, 0xA0), temp_read(0x19, 0x00)]);
        assert_eq!(block_on(sensor.read_fahrenheit()), Ok(77.0));
        finish(sensor);
    }

    // ── Configuration ────────────────────────────────────────────────

    #[test]
    fn shutdown_and_wakeup_toggle_sd_bit() {
        let mut sensor = sensor(&[
            config_read(0x60, 0xA0),
            config_write(0x01, 0x80),
            config_write(0x00, 0x80),
        ]);
        block_on(sensor.shutdown()).unwrap();
        block_on(sensor.wakeup()).unwrap();
        assert_eq!(
            sensor.config_state(),
            ConfigState::Ready(Configuration::default())
        );
        finish(sensor);
    }

    #[test]
    fn setters_accumulate_on_cache() {
        let mut sensor = sensor(&[
            config_read(0x60, 0xA0),
            config_write(0x18, 0x80),
            config_write(0x1C, 0x80),
            config_write(0x1E, 0x80),
            config_write(0x1E, 0xC0),
            config_write(0x1E, 0xD0),
        ]);
        block_on(sensor.set_number_of_faults(NumberOfFaults::Six)).unwrap();
        block_on(sensor.set_alert_polarity(AlertPolarity::ActiveHigh)).unwrap();
        block_on(sensor.set_thermostat_mode(ThermostatMode::Interrupt)).unwrap();
        block_on(sensor.set_conversion_rate(ConversionRate::Hz8)).unwrap();
        block_on(sensor.set_resolution(Resolution::Bits13)).unwrap();
        finish(sensor);
    }

    #[test]
    fn failed_write_keeps_previous_cache() {
        let mut sensor = sensor(&[
            config_read(0x60, 0xA0),
            config_write(0x01, 0x80).with_error(ErrorKind::Other),
        ]);
        block_on(sensor.init()).unwrap();
        assert_eq!(
            block_on(sensor.shutdown()),
            Err(Tmp102Error::I2c(ErrorKind::Other))
        );
        assert_eq!(
            sensor.config_state(),
            ConfigState::Ready(Configuration::default())
        );
        finish(sensor);
    }

    // ── Alert ────────────────────────────────────────────────────────

    #[test]
    fn reads_alert_without_touching_cache() {
        let mut sensor = sensor(&[config_read(0x60, 0x80), config_read(0x64, 0x80)]);
        assert_eq!(block_on(sensor.read_alert()), Ok(true));
        assert_eq!(block_on(sensor.read_alert()), Ok(false));
        assert_eq!(sensor.config_state(), ConfigState::Uninitialized);
        finish(sensor);
    }

    // ── Limits ───────────────────────────────────────────────────────

    #[test]
    fn limits_use_cached_resolution() {
        let mut sensor = sensor(&[
            config_read(0x60, 0xB0),
            // -10 * 16 = -160, << 3
            I2cTransaction::write(ADDR, vec![0x02, 0xFB, 0x00]),
            I2cTransaction::write(ADDR, vec![0x03, 0x4B, 0x00]),
        ]);
        block_on(sensor.set_alert_temperature_range(Celsius(-10.0), Celsius(150.0))).unwrap();
        finish(sensor);
    }

    #[test]
    fn reads_power_on_limits() {
        let mut sensor = sensor(&[
            config_read(0x60, 0xA0),
            I2cTransaction::write_read(ADDR, vec![0x02], vec![0x4B, 0x00]),
            I2cTransaction::write_read(ADDR, vec![0x03], vec![0x50, 0x00]),
        ]);
        assert_eq!(
            block_on(sensor.read_alert_temperature_range()),
            Ok((Celsius(75.0), Celsius(80.0)))
        );
        finish(sensor);
    }

    #[test]
    fn single_limit_setters() {
        let mut sensor = sensor(&[
            config_read(0x60, 0xA0),
            I2cTransaction::write(ADDR, vec![0x03, 0x1E, 0x00]),
            I2cTransaction::write(ADDR, vec![0x02, 0x19, 0x00]),
        ]);
        block_on(sensor.set_high_temperature(Celsius(30.0))).unwrap();
        block_on(sensor.set_low_temperature(Celsius(25.0))).unwrap();
        finish(sensor);
    }

    // ── Errors ───────────────────────────────────────────────────────

    #[test]
    fn bus_error_is_propagated_unchanged() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
        let mut sensor = sensor(&[config_read(0x60, 0xA0).with_error(nack)]);
        assert_eq!(
            block_on(sensor.read_celsius()),
            Err(Tmp102Error::I2c(nack))
        );
        assert_eq!(sensor.config_state(), ConfigState::Uninitialized);
        finish(sensor);
    }

    #[test]
    fn failed_one_shot_trigger_skips_wait() {
        let mut sensor = sensor(&[
            config_read(0x61, 0xA0),
            config_write(0x81, 0x80).with_error(ErrorKind::Bus),
        ]);
        assert_eq!(
            block_on(sensor.read_celsius()),
            Err(Tmp102Error::I2c(ErrorKind::Bus))
        );
        assert_eq!(finish(sensor), 0);
    }
}
