//! Error types for the ADT7410 driver.

use core::fmt;

/// Failure of an ADT7410 operation.
///
/// Register codecs are total, so every failure comes from the I2C
/// transfer and carries the HAL error as-is. Nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adt7410Error<E> {
    /// The transfer failed, e.g. the sensor did not acknowledge its
    /// address while it reloads defaults after a reset.
    I2c(E),
}

impl<E> From<E> for Adt7410Error<E> {
    fn from(error: E) -> Self {
        Adt7410Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Adt7410Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Adt7410Error::I2c(e) => write!(f, "ADT7410 bus transfer failed: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Adt7410Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Adt7410Error::I2c(e) => defmt::write!(f, "ADT7410 bus transfer failed: {}", e),
        }
    }
}

/// A 7-bit address the A1/A0 strap pins cannot select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAddress(pub u8);

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02X} is not an ADT7410 address (0x48-0x4B)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_device() {
        let error: Adt7410Error<&str> = "nack".into();
        assert_eq!(error.to_string(), "ADT7410 bus transfer failed: \"nack\"");
        assert_eq!(
            InvalidAddress(0x90).to_string(),
            "0x90 is not an ADT7410 address (0x48-0x4B)"
        );
    }
}
