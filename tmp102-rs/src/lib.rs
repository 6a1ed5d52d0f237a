//! Async driver for the Texas Instruments TMP102 digital temperature sensor.
//!
//! The TMP102 has four 16-bit registers behind a one-byte pointer: the
//! temperature result, a two-byte configuration and the T_LOW/T_HIGH limits
//! that drive the ALERT pin. The temperature and both limits share one
//! layout, 12-bit in normal mode and 13-bit in extended mode, selected by
//! [`Resolution`].
//!
//! ```no_run
//! use tmp102::{Tmp102, DEFAULT_ADDRESS};
//!
//! # async fn example(
//! #     i2c: impl embedded_hal_async::i2c::I2c,
//! #     delay: impl embedded_hal_async::delay::DelayNs,
//! # ) {
//! let mut sensor = Tmp102::new(i2c, delay, DEFAULT_ADDRESS);
//!
//! // In shutdown mode every read triggers a one-shot conversion first.
//! sensor.shutdown().await.unwrap();
//! let celsius = sensor.read_celsius().await.unwrap();
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable `defmt::Format` implementations on the public
//!   types and trace logging of register transactions.

#![cfg_attr(not(test), no_std)]

pub use config::{
    AlertPolarity, Configuration, ConversionRate, NumberOfFaults, OperationMode, ThermostatMode,
};
pub use error::{InvalidAddress, Tmp102Error};
pub use registers::{DeviceAddress, RegisterAddress, CONVERSION_TIME_MS, DEFAULT_ADDRESS};
pub use sensor::{ConfigState, Tmp102};
pub use temperature::{decode_temperature, encode_temperature, Resolution};
pub use transducer::{Celsius, TemperatureSensor};

mod config;
mod driver;
mod error;
mod registers;
mod sensor;
mod temperature;
