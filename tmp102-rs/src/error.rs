//! Error types for the TMP102 driver.

use core::fmt;

/// Failure of a TMP102 operation. The register codecs cannot fail, so the
/// only source is the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tmp102Error<E> {
    /// The I2C transfer failed, e.g. the sensor did not acknowledge.
    I2c(E),
}

impl<E> From<E> for Tmp102Error<E> {
    fn from(error: E) -> Self {
        Tmp102Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Tmp102Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tmp102Error::I2c(e) => write!(f, "TMP102 bus transfer failed: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Tmp102Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Tmp102Error::I2c(e) => defmt::write!(f, "TMP102 bus transfer failed: {}", e),
        }
    }
}

/// A 7-bit address the ADD0 pin cannot select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAddress(pub u8);

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02X} is not a TMP102 address (0x48-0x4B)", self.0)
    }
}
