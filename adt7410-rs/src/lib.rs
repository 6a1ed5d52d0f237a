//! Async driver for the ADT7410 16-bit digital I2C temperature sensor.
//!
//! This crate provides an `embedded-hal-async` I2C driver for the Analog
//! Devices ADT7410 and its register-level codecs.
//!
//! # Architecture
//!
//! The crate is split into layers:
//!
//! - **`registers`**: register addresses and widths, strap addresses and
//!   protocol constants.
//! - **`config`**: the one-byte configuration register as six typed
//!   fields ([`Configuration`]).
//! - **`temperature`**: fixed-point conversion between register words and
//!   [`Celsius`] for both [`Resolution`] modes.
//! - **`status`**: [`Status`] and [`ChipId`] snapshots.
//! - **`driver`** (crate-private): register read/write transactions.
//! - **[`Adt7410`]** (public): the stateful driver that owns the bus and
//!   the cached configuration.
//!
//! The codecs are pure functions; only the bus can fail, and its error is
//! returned unchanged inside [`Adt7410Error`].
//!
//! # Quick start
//!
//! ```no_run
//! use adt7410::{Adt7410, DEFAULT_ADDRESS};
//!
//! # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
//! // Construct with any `embedded-hal-async` I2C implementation
//! let mut sensor = Adt7410::new(i2c, DEFAULT_ADDRESS);
//!
//! let celsius = sensor.read_celsius().await.unwrap();
//! let status = sensor.read_status().await.unwrap();
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable `defmt::Format` implementations on the public
//!   types and trace logging of register transactions.

#![cfg_attr(not(test), no_std)]

pub use config::{
    Configuration, CtOutputPolarity, IntOutputPolarity, NumberOfFaults, OperationMode,
    TemperatureDetectionMode,
};
pub use error::{Adt7410Error, InvalidAddress};
pub use registers::{
    DeviceAddress, RegisterAddress, DEFAULT_ADDRESS, MANUFACTURER_ID, ONE_SHOT_CONVERSION_MS,
    RESET_DELAY_US,
};
pub use sensor::{Adt7410, ConfigState};
pub use status::{ChipId, Status};
pub use temperature::{
    decode_hysteresis, decode_temperature, encode_hysteresis, encode_temperature, Resolution,
    SETPOINT_RESOLUTION,
};
pub use transducer::{Celsius, TemperatureSensor};

mod config;
mod driver;
mod error;
mod registers;
mod sensor;
mod status;
mod temperature;
