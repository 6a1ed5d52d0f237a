//! Register map and protocol constants for the ADT7410.
//!
//! Every transaction starts by writing a one-byte register pointer. 16-bit
//! registers are big-endian (MSB at the even address) and are read or
//! written in one transaction starting at the MSB address.

use transducer::Register;

use crate::error::InvalidAddress;

// ---------------------------------------------------------------------------
// Registers
// ---------------------------------------------------------------------------

/// Addressable registers of the ADT7410.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RegisterAddress {
    /// Temperature value, 16-bit.
    TempMsb = 0x00,
    TempLsb = 0x01,
    /// Interrupt flags and conversion ready bit.
    Status = 0x02,
    /// Packed [`Configuration`](crate::Configuration) byte.
    Config = 0x03,
    /// T_HIGH setpoint, 16-bit. Power-on default 64 °C.
    SetpointHighMsb = 0x04,
    SetpointHighLsb = 0x05,
    /// T_LOW setpoint, 16-bit. Power-on default 10 °C.
    SetpointLowMsb = 0x06,
    SetpointLowLsb = 0x07,
    /// T_CRIT setpoint, 16-bit. Power-on default 147 °C.
    SetpointCritMsb = 0x08,
    SetpointCritLsb = 0x09,
    /// T_HYST, whole degrees in bits 3:0. Power-on default 5 °C.
    SetpointHyst = 0x0A,
    /// Manufacturer ID and silicon revision.
    Id = 0x0B,
    /// Software reset. Written with no payload.
    Reset = 0x2F,
}

impl Register for RegisterAddress {
    fn address(self) -> u8 {
        self as u8
    }

    fn width(self) -> usize {
        match self {
            RegisterAddress::TempMsb
            | RegisterAddress::SetpointHighMsb
            | RegisterAddress::SetpointLowMsb
            | RegisterAddress::SetpointCritMsb => 2,
            RegisterAddress::Reset => 0,
            _ => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Bus addresses
// ---------------------------------------------------------------------------

/// The four 7-bit I2C addresses selected by the A1/A0 pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DeviceAddress {
    /// A1 = GND, A0 = GND
    A00 = 0x48,
    /// A1 = GND, A0 = VDD
    A01 = 0x49,
    /// A1 = VDD, A0 = GND
    A10 = 0x4A,
    /// A1 = VDD, A0 = VDD
    A11 = 0x4B,
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
            0x48 => Ok(DeviceAddress::A00),
            0x49 => Ok(DeviceAddress::A01),
            0x4A => Ok(DeviceAddress::A10),
            0x4B => Ok(DeviceAddress::A11),
            _ => Err(InvalidAddress(value)),
        }
    }
}

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Address with both strap pins tied to GND.
pub const DEFAULT_ADDRESS: DeviceAddress = DeviceAddress::A00;

/// Minimum time in microseconds the device ignores the bus after a software
/// reset while it reloads its power-on defaults.
pub const RESET_DELAY_US: u64 = 200;

/// Typical conversion time in milliseconds in one-shot mode.
pub const ONE_SHOT_CONVERSION_MS: u64 = 240;

/// Manufacturer ID reported in the top five bits of the ID register.
pub const MANUFACTURER_ID: u8 = 0b11001;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_addresses_match_datasheet() {
        assert_eq!(RegisterAddress::TempMsb.address(), 0x00);
        assert_eq!(RegisterAddress::Status.address(), 0x02);
        assert_eq!(RegisterAddress::Config.address(), 0x03);
        assert_eq!(RegisterAddress::SetpointHighMsb.address(), 0x04);
        assert_eq!(RegisterAddress::SetpointLowMsb.address(), 0x06);
        assert_eq!(RegisterAddress::SetpointCritMsb.address(), 0x08);
        assert_eq!(RegisterAddress::SetpointHyst.address(), 0x0A);
        assert_eq!(RegisterAddress::Id.address(), 0x0B);
        assert_eq!(RegisterAddress::Reset.address(), 0x2F);
    }

    #[test]
    fn register_widths() {
        assert_eq!(RegisterAddress::TempMsb.width(), 2);
        assert_eq!(RegisterAddress::SetpointCritMsb.width(), 2);
        assert_eq!(RegisterAddress::Status.width(), 1);
        assert_eq!(RegisterAddress::Config.width(), 1);
        assert_eq!(RegisterAddress::Id.width(), 1);
        assert_eq!(RegisterAddress::SetpointHyst.width(), 1);
        assert_eq!(RegisterAddress::Reset.width(), 0);
    }

    #[test]
    fn device_address_from_strap_value() {
        assert_eq!(DeviceAddress::try_from(0x4A), Ok(DeviceAddress::A10));
        assert_eq!(u8::from(DeviceAddress::A11), 0x4B);
    }

    #[test]
    fn device_address_rejects_unstrappable_values() {
        assert_eq!(DeviceAddress::try_from(0x47), Err(InvalidAddress(0x47)));
        // 8-bit (write) form of A00.
        assert_eq!(DeviceAddress::try_from(0x90), Err(InvalidAddress(0x90)));
    }
}
