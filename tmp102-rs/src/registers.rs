//! Register map and timing constants for the TMP102.

use transducer::Register;

use crate::error::InvalidAddress;

// ---------------------------------------------------------------------------
// Registers
// ---------------------------------------------------------------------------

/// Pointer values of the four TMP102 registers. All of them are 16 bits
/// wide and transferred MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RegisterAddress {
    /// Conversion result. Read-only.
    Temperature = 0x00,
    /// Two-byte [`Configuration`](crate::Configuration) plus the
    /// read-only converter resolution and alert bits.
    Config = 0x01,
    /// T_LOW limit. Power-on default 75 °C.
    LowLimit = 0x02,
    /// T_HIGH limit. Power-on default 80 °C.
    HighLimit = 0x03,
}

impl Register for RegisterAddress {
    fn address(self) -> u8 {
        self as u8
    }

    fn width(self) -> usize {
        2
    }
}

// ---------------------------------------------------------------------------
// Bus addresses
// ---------------------------------------------------------------------------

/// The four 7-bit I2C addresses selected by wiring the ADD0 pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DeviceAddress {
    /// ADD0 to GND
    Gnd = 0x48,
    /// ADD0 to V+
    Vplus = 0x49,
    /// ADD0 to SDA
    Sda = 0x4A,
    /// ADD0 to SCL
    Scl = 0x4B,
}

impl From<DeviceAddress> for u8 {
    fn from(address: DeviceAddress) -> Self {
        address as u8
    }
}

impl TryFrom<u8> for DeviceAddress {
    type Error = InvalidAddress;

    fn try_from(value: u8) -> Result<Self, InvalidAddress> {
        match value {
            0x48 => Ok(DeviceAddress::Gnd),
            0x49 => Ok(DeviceAddress::Vplus),
            0x4A => Ok(DeviceAddress::Sda),
            0x4B => Ok(DeviceAddress::Scl),
            _ => Err(InvalidAddress(value)),
        }
    }
}

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// ADD0 tied to ground.
pub const DEFAULT_ADDRESS: DeviceAddress = DeviceAddress::Gnd;

/// Typical duration of one conversion in milliseconds.
pub const CONVERSION_TIME_MS: u64 = 26;
