//! Shared building blocks for register-level temperature sensor drivers.
//!
//! Every driver in this workspace follows the same pattern: a catalogue of
//! fixed-width registers, a packed configuration byte split into enumerated
//! fields, and a two's-complement fixed-point temperature format. This crate
//! holds the pieces those drivers have in common so each device crate only
//! describes what is specific to its hardware.
//!
//! - [`Celsius`]: the physical unit every driver reports, with Kelvin and
//!   Fahrenheit conversions.
//! - [`BitField`]: one enumerated field of a packed configuration byte.
//! - [`FixedPoint`]: a signed fixed-point temperature format inside a
//!   16-bit word.
//! - [`Register`]: a fixed-width, addressable device register.
//! - [`TemperatureSensor`]: the async read interface implemented by every
//!   driver.
//!
//! # `no_std` Compatibility
//!
//! The crate uses no heap allocation and no floating-point functions from
//! `std`. The optional `defmt` feature derives `defmt::Format` on the
//! public value types.

#![no_std]

mod bitfield;
mod fixed_point;
mod register;
mod sensor;
mod units;

pub use bitfield::{decode_field, encode_field, BitField};
pub use fixed_point::FixedPoint;
pub use register::Register;
pub use sensor::TemperatureSensor;
pub use units::Celsius;
