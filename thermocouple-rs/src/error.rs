//! Error types for the thermocouple drivers.

use core::fmt;

/// Errors reported by the thermocouple drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermocoupleError<E> {
    /// Underlying SPI bus error.
    Spi(E),
    /// No thermocouple connected.
    OpenCircuit,
    /// Thermocouple shorted to GND (MAX31855 only).
    ShortToGround,
    /// Thermocouple shorted to VCC (MAX31855 only).
    ShortToVcc,
    /// Fault flag set without a cause bit (MAX31855 only).
    Fault,
}

impl<E> From<E> for ThermocoupleError<E> {
    fn from(error: E) -> Self {
        ThermocoupleError::Spi(error)
    }
}

impl<E: fmt::Debug> fmt::Display for ThermocoupleError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThermocoupleError::Spi(e) => write!(f, "SPI error: {:?}", e),
            ThermocoupleError::OpenCircuit => write!(f, "Thermocouple open circuit"),
            ThermocoupleError::ShortToGround => write!(f, "Thermocouple shorted to GND"),
            ThermocoupleError::ShortToVcc => write!(f, "Thermocouple shorted to VCC"),
            ThermocoupleError::Fault => write!(f, "Thermocouple fault"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for ThermocoupleError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ThermocoupleError::Spi(e) => defmt::write!(f, "SPI error: {}", e),
            ThermocoupleError::OpenCircuit => defmt::write!(f, "Open circuit"),
            ThermocoupleError::ShortToGround => defmt::write!(f, "Short to GND"),
            ThermocoupleError::ShortToVcc => defmt::write!(f, "Short to VCC"),
            ThermocoupleError::Fault => defmt::write!(f, "Fault"),
        }
    }
}
