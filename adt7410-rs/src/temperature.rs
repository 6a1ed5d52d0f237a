//! Conversion between raw register words and degrees Celsius.
//!
//! The temperature value register holds a big-endian two's-complement word
//! whose layout depends on [`Resolution`]:
//!
//! | Resolution | Code bits | Padding | Step        | Range                |
//! |------------|-----------|---------|-------------|----------------------|
//! | `Bits13`   | 15:3      | 2:0     | 0.0625 °C   | −256 to +255.9375 °C |
//! | `Bits16`   | 15:0      | none    | 0.0078125 °C| −256 to +255.99 °C   |
//!
//! In 13-bit mode the padding bits carry the T_CRIT/T_HIGH/T_LOW flags and
//! are discarded. The setpoint registers always use the 16-bit layout.

use transducer::{BitField, Celsius, FixedPoint};

const BITS13: FixedPoint = FixedPoint::new(3, 16.0);
const BITS16: FixedPoint = FixedPoint::new(0, 128.0);

/// Largest hysteresis the 4-bit T_HYST field can hold.
const MAX_HYSTERESIS: u8 = 15;
const HYSTERESIS_MASK: u8 = 0b0000_1111;

/// ADC resolution, bit 7 of the configuration register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Resolution {
    /// Sign bit + 12 bits, 0.0625 °C per step.
    #[default]
    Bits13 = 0b0000_0000,
    /// Sign bit + 15 bits, 0.0078 °C per step.
    Bits16 = 0b1000_0000,
}

impl Resolution {
    /// Fixed-point layout of the temperature value register in this mode.
    pub const fn format(self) -> FixedPoint {
        match self {
            Resolution::Bits13 => BITS13,
            Resolution::Bits16 => BITS16,
        }
    }

    /// Temperature represented by one code step.
    pub fn step(self) -> f32 {
        self.format().step()
    }
}

impl BitField for Resolution {
    const MASK: u8 = 0b1000_0000;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            Resolution::Bits16
        } else {
            Resolution::Bits13
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Layout of the T_HIGH, T_LOW and T_CRIT setpoint registers.
pub const SETPOINT_RESOLUTION: Resolution = Resolution::Bits16;

/// Decodes the two bytes of a temperature register.
///
/// ```
/// use adt7410::{decode_temperature, Celsius, Resolution};
///
/// assert_eq!(decode_temperature(Resolution::Bits13, [0x05, 0x98]), Celsius(11.1875));
/// assert_eq!(decode_temperature(Resolution::Bits16, [0x19, 0x00]), Celsius(50.0));
/// ```
pub fn decode_temperature(resolution: Resolution, raw: [u8; 2]) -> Celsius {
    resolution.format().decode(u16::from_be_bytes(raw))
}

/// Encodes a temperature into the two bytes of a temperature register,
/// rounding to the nearest step and saturating at the ends of the range.
pub fn encode_temperature(resolution: Resolution, temperature: Celsius) -> [u8; 2] {
    resolution.format().encode(temperature).to_be_bytes()
}

/// Decodes the T_HYST register. Bits 7:4 are unused.
pub fn decode_hysteresis(raw: u8) -> Celsius {
    Celsius(f32::from(raw & HYSTERESIS_MASK))
}

/// Encodes a hysteresis in whole degrees, rounded and clamped to 0–15 °C.
pub fn encode_hysteresis(hysteresis: Celsius) -> u8 {
    let degrees = hysteresis.0 + 0.5;
    if degrees <= 0.0 {
        0
    } else if degrees >= f32::from(MAX_HYSTERESIS) {
        MAX_HYSTERESIS
    } else {
        degrees as u8
    }
}
