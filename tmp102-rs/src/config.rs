//! Codec for the two-byte configuration register.
//!
//! ```text
//! byte 0:   7    6  5    4  3     2     1    0
//!         [OS] [R1 R0] [F1 F0] [POL] [TM] [SD]
//! byte 1:   7   6     5     4    3..0
//!         [CR1 CR0] [AL]  [EM]  [0000]
//! ```
//!
//! OS triggers a one-shot conversion and is not part of [`Configuration`].
//! R1/R0 and AL are read-only; they are ignored on decode and written as
//! zero.

use transducer::{decode_field, encode_field, BitField};

use crate::temperature::Resolution;

/// One-shot trigger, byte 0 bit 7.
pub(crate) const ONE_SHOT: u8 = 0b1000_0000;

/// Alert flag, byte 1 bit 5. Follows the ALERT pin, including its polarity.
pub(crate) const ALERT: u8 = 0b0010_0000;

/// Shutdown (SD) bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OperationMode {
    #[default]
    Continuous = 0b0000_0000,
    /// Everything but the serial interface is powered down. Reads trigger a
    /// one-shot conversion.
    Shutdown = 0b0000_0001,
}

impl BitField for OperationMode {
    const MASK: u8 = 0b0000_0001;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            OperationMode::Shutdown
        } else {
            OperationMode::Continuous
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Thermostat (TM) bit: how ALERT reacts to the limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ThermostatMode {
    /// Active from T_HIGH until the temperature falls below T_LOW.
    #[default]
    Comparator = 0b0000_0000,
    /// Active when a limit is crossed, cleared by the next register read.
    Interrupt = 0b0000_0010,
}

impl BitField for ThermostatMode {
    const MASK: u8 = 0b0000_0010;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            ThermostatMode::Interrupt
        } else {
            ThermostatMode::Comparator
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Polarity (POL) of the ALERT pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AlertPolarity {
    #[default]
    ActiveLow = 0b0000_0000,
    ActiveHigh = 0b0000_0100,
}

impl BitField for AlertPolarity {
    const MASK: u8 = 0b0000_0100;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            AlertPolarity::ActiveHigh
        } else {
            AlertPolarity::ActiveLow
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Consecutive faulty conversions (F1/F0) before ALERT changes state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum NumberOfFaults {
    #[default]
    One = 0b0000_0000,
    Two = 0b0000_1000,
    Four = 0b0001_0000,
    Six = 0b0001_1000,
}

impl BitField for NumberOfFaults {
    const MASK: u8 = 0b0001_1000;

    fn from_bits(bits: u8) -> Self {
        match bits {
            0b0000_1000 => NumberOfFaults::Two,
            0b0001_0000 => NumberOfFaults::Four,
            0b0001_1000 => NumberOfFaults::Six,
            _ => NumberOfFaults::One,
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Continuous conversion rate (CR1/CR0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ConversionRate {
    Hz0_25 = 0b0000_0000,
    Hz1 = 0b0100_0000,
    #[default]
    Hz4 = 0b1000_0000,
    Hz8 = 0b1100_0000,
}

impl BitField for ConversionRate {
    const MASK: u8 = 0b1100_0000;

    fn from_bits(bits: u8) -> Self {
        match bits {
            0b0100_0000 => ConversionRate::Hz1,
            0b1000_0000 => ConversionRate::Hz4,
            0b1100_0000 => ConversionRate::Hz8,
            _ => ConversionRate::Hz0_25,
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Writable fields of the configuration register.
///
/// `Default` matches the power-on state: continuous 4 Hz conversions in
/// normal mode, comparator thermostat, active-low ALERT after one fault.
///
/// ```
/// use tmp102::{Configuration, ConversionRate, OperationMode};
///
/// // Power-on register contents, including the read-only bits.
/// let config = Configuration::from_register([0x60, 0xA0]);
/// assert_eq!(config, Configuration::default());
/// assert_eq!(config.conversion_rate, ConversionRate::Hz4);
///
/// let config = config.with_operation_mode(OperationMode::Shutdown);
/// assert_eq!(config.to_register(), [0x01, 0x80]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub operation_mode: OperationMode,
    pub thermostat_mode: ThermostatMode,
    pub alert_polarity: AlertPolarity,
    pub number_of_faults: NumberOfFaults,
    pub resolution: Resolution,
    pub conversion_rate: ConversionRate,
}

impl Configuration {
    /// Decodes both configuration bytes, MSB first.
    pub fn from_register(bytes: [u8; 2]) -> Self {
        let [msb, lsb] = bytes;
        Self {
            operation_mode: decode_field(msb),
            thermostat_mode: decode_field(msb),
            alert_polarity: decode_field(msb),
            number_of_faults: decode_field(msb),
            resolution: decode_field(lsb),
            conversion_rate: decode_field(lsb),
        }
    }

    /// Encodes the writable fields, MSB first.
    pub fn to_register(&self) -> [u8; 2] {
        let msb = encode_field(self.operation_mode)
            | encode_field(self.thermostat_mode)
            | encode_field(self.alert_polarity)
            | encode_field(self.number_of_faults);
        let lsb = encode_field(self.resolution) | encode_field(self.conversion_rate);
        [msb, lsb]
    }

    pub fn with_operation_mode(mut self, mode: OperationMode) -> Self {
        self.operation_mode = mode;
        self
    }

    pub fn with_thermostat_mode(mut self, mode: ThermostatMode) -> Self {
        self.thermostat_mode = mode;
        self
    }

    pub fn with_alert_polarity(mut self, polarity: AlertPolarity) -> Self {
        self.alert_polarity = polarity;
        self
    }

    pub fn with_number_of_faults(mut self, number_of_faults: NumberOfFaults) -> Self {
        self.number_of_faults = number_of_faults;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_conversion_rate(mut self, rate: ConversionRate) -> Self {
        self.conversion_rate = rate;
        self
    }

    /// Whether a raw configuration read reports an active alert, taking
    /// the ALERT polarity into account.
    pub(crate) fn alert_active(bytes: [u8; 2]) -> bool {
        let polarity: AlertPolarity = decode_field(bytes[0]);
        let flag = bytes[1] & ALERT != 0;
        flag == (polarity == AlertPolarity::ActiveHigh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_bits_are_ignored() {
        let config = Configuration::from_register([0xFF, 0xFF]);
        assert_eq!(config.to_register(), [0x1F, 0xD0]);
    }

    #[test]
    fn writable_bits_round_trip() {
        for msb in 0..=0x1Fu8 {
            for lsb in [0x00, 0x10, 0x40, 0x50, 0x80, 0x90, 0xC0, 0xD0] {
                assert_eq!(
                    Configuration::from_register([msb, lsb]).to_register(),
                    [msb, lsb]
                );
            }
        }
    }

    #[test]
    fn field_masks_do_not_overlap_control_bits() {
        let msb_masks = [
            OperationMode::MASK,
            ThermostatMode::MASK,
            AlertPolarity::MASK,
            NumberOfFaults::MASK,
        ];
        for mask in msb_masks {
            assert_eq!(mask & ONE_SHOT, 0);
        }
        assert_eq!((Resolution::MASK | ConversionRate::MASK) & ALERT, 0);
    }

    #[test]
    fn decodes_each_field_position() {
        let config = Configuration::from_register([0b0001_0111, 0b0101_0000]);
        assert_eq!(config.operation_mode, OperationMode::Shutdown);
        assert_eq!(config.thermostat_mode, ThermostatMode::Interrupt);
        assert_eq!(config.alert_polarity, AlertPolarity::ActiveHigh);
        assert_eq!(config.number_of_faults, NumberOfFaults::Four);
        assert_eq!(config.resolution, Resolution::Bits13);
        assert_eq!(config.conversion_rate, ConversionRate::Hz1);
    }

    #[test]
    fn alert_follows_polarity() {
        // Active low: AL reads 1 while idle.
        assert!(!Configuration::alert_active([0x60, 0xA0]));
        assert!(Configuration::alert_active([0x60, 0x80]));
        // Active high: AL reads 0 while idle.
        assert!(!Configuration::alert_active([0x64, 0x80]));
        assert!(Configuration::alert_active([0x64, 0xA0]));
    }
}
