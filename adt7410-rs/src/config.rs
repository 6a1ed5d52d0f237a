//! Codec for the one-byte configuration register.
//!
//! The register packs six independent fields, least significant bit first:
//!
//! ```text
//!   7     6  5     4        3          2          1  0
//! [RES] [OP MODE] [INT/CT] [INT POL] [CT POL] [FAULTS]
//! ```
//!
//! The masks cover all eight bits without overlap, so every byte decodes to
//! a configuration and re-encodes to the same byte.

use transducer::{decode_field, encode_field, BitField};

use crate::temperature::Resolution;

/// Number of consecutive out-of-limit conversions before INT and CT assert.
/// Filters false triggers caused by temperature noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum NumberOfFaults {
    #[default]
    One = 0b0000_0000,
    Two = 0b0000_0001,
    Three = 0b0000_0010,
    Four = 0b0000_0011,
}

impl BitField for NumberOfFaults {
    const MASK: u8 = 0b0000_0011;

    fn from_bits(bits: u8) -> Self {
        match bits {
            0b01 => NumberOfFaults::Two,
            0b10 => NumberOfFaults::Three,
            0b11 => NumberOfFaults::Four,
            _ => NumberOfFaults::One,
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Active level of the CT (critical temperature) pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CtOutputPolarity {
    #[default]
    ActiveLow = 0b0000_0000,
    ActiveHigh = 0b0000_0100,
}

impl BitField for CtOutputPolarity {
    const MASK: u8 = 0b0000_0100;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            CtOutputPolarity::ActiveHigh
        } else {
            CtOutputPolarity::ActiveLow
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Active level of the INT pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IntOutputPolarity {
    #[default]
    ActiveLow = 0b0000_0000,
    ActiveHigh = 0b0000_1000,
}

impl BitField for IntOutputPolarity {
    const MASK: u8 = 0b0000_1000;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            IntOutputPolarity::ActiveHigh
        } else {
            IntOutputPolarity::ActiveLow
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// How the INT and CT pins report limit violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TemperatureDetectionMode {
    /// Pins stay asserted while the temperature is outside the limits.
    #[default]
    Comparator = 0b0000_0000,
    /// Pins latch until the status register is read.
    Interrupt = 0b0001_0000,
}

impl BitField for TemperatureDetectionMode {
    const MASK: u8 = 0b0001_0000;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            TemperatureDetectionMode::Interrupt
        } else {
            TemperatureDetectionMode::Comparator
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Conversion scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OperationMode {
    /// A new conversion starts as soon as the previous one finishes.
    #[default]
    Continuous = 0b0000_0000,
    /// One conversion (typically 240 ms), then shutdown. Wait at least
    /// [`ONE_SHOT_CONVERSION_MS`](crate::ONE_SHOT_CONVERSION_MS) before
    /// reading the result.
    OneShot = 0b0010_0000,
    /// One conversion per second.
    Sps = 0b0100_0000,
    /// Everything but the serial interface is powered down. The last result
    /// stays readable; waking up takes about 1 ms.
    Shutdown = 0b0110_0000,
}

impl BitField for OperationMode {
    const MASK: u8 = 0b0110_0000;

    fn from_bits(bits: u8) -> Self {
        match bits {
            0b0010_0000 => OperationMode::OneShot,
            0b0100_0000 => OperationMode::Sps,
            0b0110_0000 => OperationMode::Shutdown,
            _ => OperationMode::Continuous,
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Decoded contents of the configuration register.
///
/// `Default` is the power-on value `0x00`.
///
/// ```
/// use adt7410::{Configuration, NumberOfFaults, Resolution};
///
/// let config = Configuration::from_register(0b1000_0001);
/// assert_eq!(config.resolution, Resolution::Bits16);
/// assert_eq!(config.number_of_faults, NumberOfFaults::Two);
/// assert_eq!(config.to_register(), 0b1000_0001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub number_of_faults: NumberOfFaults,
    pub ct_output_polarity: CtOutputPolarity,
    pub int_output_polarity: IntOutputPolarity,
    pub temperature_detection_mode: TemperatureDetectionMode,
    pub operation_mode: OperationMode,
    pub resolution: Resolution,
}

impl Configuration {
    /// Decodes a raw configuration byte. Total over all byte values.
    pub fn from_register(byte: u8) -> Self {
        Self {
            number_of_faults: decode_field(byte),
            ct_output_polarity: decode_field(byte),
            int_output_polarity: decode_field(byte),
            temperature_detection_mode: decode_field(byte),
            operation_mode: decode_field(byte),
            resolution: decode_field(byte),
        }
    }

    /// Encodes the configuration into its register byte.
    pub fn to_register(&self) -> u8 {
        encode_field(self.number_of_faults)
            | encode_field(self.ct_output_polarity)
            | encode_field(self.int_output_polarity)
            | encode_field(self.temperature_detection_mode)
            | encode_field(self.operation_mode)
            | encode_field(self.resolution)
    }

    pub fn with_number_of_faults(mut self, number_of_faults: NumberOfFaults) -> Self {
        self.number_of_faults = number_of_faults;
        self
    }

    pub fn with_ct_output_polarity(mut self, polarity: CtOutputPolarity) -> Self {
        self.ct_output_polarity = polarity;
        self
    }

    pub fn with_int_output_polarity(mut self, polarity: IntOutputPolarity) -> Self {
        self.int_output_polarity = polarity;
        self
    }

    pub fn with_temperature_detection_mode(mut self, mode: TemperatureDetectionMode) -> Self {
        self.temperature_detection_mode = mode;
        self
    }

    pub fn with_operation_mode(mut self, mode: OperationMode) -> Self {
        self.operation_mode = mode;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
}

impl From<u8> for Configuration {
    fn from(byte: u8) -> Self {
        Self::from_register(byte)
    }
}

impl From<Configuration> for u8 {
    fn from(config: Configuration) -> Self {
        config.to_register()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAULTS: [NumberOfFaults; 4] = [
        NumberOfFaults::One,
        NumberOfFaults::Two,
        NumberOfFaults::Three,
        NumberOfFaults::Four,
    ];
    const CT: [CtOutputPolarity; 2] = [CtOutputPolarity::ActiveLow, CtOutputPolarity::ActiveHigh];
    const INT: [IntOutputPolarity; 2] =
        [IntOutputPolarity::ActiveLow, IntOutputPolarity::ActiveHigh];
    const DETECTION: [TemperatureDetectionMode; 2] = [
        TemperatureDetectionMode::Comparator,
        TemperatureDetectionMode::Interrupt,
    ];
    const MODES: [OperationMode; 4] = [
        OperationMode::Continuous,
        OperationMode::OneShot,
        OperationMode::Sps,
        OperationMode::Shutdown,
    ];
    const RESOLUTIONS: [Resolution; 2] = [Resolution::Bits13, Resolution::Bits16];

    #[test]
    fn default_is_power_on_value() {
        assert_eq!(Configuration::default().to_register(), 0x00);
        assert_eq!(Configuration::from_register(0x00), Configuration::default());
    }

    #[test]
    fn field_masks_cover_byte_without_overlap() {
        let masks = [
            NumberOfFaults::MASK,
            CtOutputPolarity::MASK,
            IntOutputPolarity::MASK,
            TemperatureDetectionMode::MASK,
            OperationMode::MASK,
            Resolution::MASK,
        ];
        let mut union = 0u8;
        for mask in masks {
            assert_eq!(union & mask, 0, "mask {:08b} overlaps", mask);
            union |= mask;
        }
        assert_eq!(union, 0xFF);
    }

    #[test]
    fn every_byte_round_trips() {
        for byte in 0..=u8::MAX {
            assert_eq!(Configuration::from_register(byte).to_register(), byte);
        }
    }

    #[test]
    fn every_configuration_round_trips() {
        for faults in FAULTS {
            for ct in CT {
                for int in INT {
                    for detection in DETECTION {
                        for mode in MODES {
                            for resolution in RESOLUTIONS {
                                let config = Configuration::default()
                                    .with_number_of_faults(faults)
                                    .with_ct_output_polarity(ct)
                                    .with_int_output_polarity(int)
                                    .with_temperature_detection_mode(detection)
                                    .with_operation_mode(mode)
                                    .with_resolution(resolution);
                                assert_eq!(
                                    Configuration::from_register(config.to_register()),
                                    config
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn decodes_each_field_position() {
        let config = Configuration::from_register(0b1011_0110);
        assert_eq!(config.number_of_faults, NumberOfFaults::Three);
        assert_eq!(config.ct_output_polarity, CtOutputPolarity::ActiveHigh);
        assert_eq!(config.int_output_polarity, IntOutputPolarity::ActiveLow);
        assert_eq!(
            config.temperature_detection_mode,
            TemperatureDetectionMode::Interrupt
        );
        assert_eq!(config.operation_mode, OperationMode::OneShot);
        assert_eq!(config.resolution, Resolution::Bits16);
    }

    #[test]
    fn encodes_shutdown_with_16_bit_resolution() {
        let config = Configuration::default()
            .with_operation_mode(OperationMode::Shutdown)
            .with_resolution(Resolution::Bits16);
        assert_eq!(u8::from(config), 0b1110_0000);
    }
}
