//! Async SPI drivers for the MAX6675 and MAX31855 thermocouple converters.
//!
//! Both parts are read-only: asserting chip select shifts out one frame
//! holding the latest conversion and fault bits. There are no registers to
//! address and nothing to configure, so each driver is a single typed read
//! on top of an `embedded-hal-async` [`SpiDevice`] plus the shared
//! fixed-point decoding from [`transducer`].
//!
//! | Part     | Frame  | Thermocouple       | Cold junction       |
//! |----------|--------|--------------------|---------------------|
//! | MAX6675  | 16 bit | 12 bit, 0.25 °C    | n/a                 |
//! | MAX31855 | 32 bit | 14 bit, 0.25 °C    | 12 bit, 0.0625 °C   |
//!
//! The MAX6675 is limited to a 4.3 MHz SPI clock and the MAX31855 to
//! 5 MHz; configure the bus accordingly.
//!
//! # Quick start
//!
//! ```no_run
//! use thermocouple::{Max31855, TemperatureSensor};
//!
//! # async fn example(spi: impl embedded_hal_async::spi::SpiDevice) {
//! let mut probe = Max31855::new(spi);
//! let celsius = probe.read_celsius().await.unwrap();
//! let readings = probe.read_both().await.unwrap();
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable `defmt::Format` implementations on the public
//!   types.
//!
//! [`SpiDevice`]: embedded_hal_async::spi::SpiDevice

#![cfg_attr(not(test), no_std)]

pub use error::ThermocoupleError;
pub use max31855::{Max31855, Readings};
pub use max6675::Max6675;
pub use transducer::{Celsius, TemperatureSensor};

mod error;
mod max31855;
mod max6675;
