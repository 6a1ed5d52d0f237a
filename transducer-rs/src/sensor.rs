use crate::units::Celsius;

/// Async temperature read interface shared by every driver.
///
/// Implementors only provide [`read_celsius`](TemperatureSensor::read_celsius);
/// the other scales are derived from it.
#[allow(async_fn_in_trait)]
pub trait TemperatureSensor {
    /// Error returned by the underlying transport.
    type Error;

    /// Reads the current temperature in degrees Celsius.
    async fn read_celsius(&mut self) -> Result<Celsius, Self::Error>;

    /// Reads the current temperature in Kelvin.
    async fn read_kelvin(&mut self) -> Result<f32, Self::Error> {
        Ok(self.read_celsius().await?.to_kelvin())
    }

    /// Reads the current temperature in degrees Fahrenheit.
    async fn read_fahrenheit(&mut self) -> Result<f32, Self::Error> {
        Ok(self.read_celsius().await?.to_fahrenheit())
    }
}
