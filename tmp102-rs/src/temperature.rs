//! Conversion between register words and degrees Celsius.
//!
//! | Resolution | Code bits | Step      | Range              |
//! |------------|-----------|-----------|--------------------|
//! | `Bits12`   | 15:4      | 0.0625 °C | −128 to +127.94 °C |
//! | `Bits13`   | 15:3      | 0.0625 °C | −256 to +255.94 °C |
//!
//! Both the conversion result and the T_LOW/T_HIGH limits use the layout
//! of the current mode.

use transducer::{BitField, Celsius, FixedPoint};

const BITS12: FixedPoint = FixedPoint::new(4, 16.0);
const BITS13: FixedPoint = FixedPoint::new(3, 16.0);

/// Normal or extended mode, the EM bit of the second configuration byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Resolution {
    /// Normal mode, sign bit + 11 bits.
    #[default]
    Bits12 = 0b0000_0000,
    /// Extended mode, sign bit + 12 bits. Needed above 128 °C.
    Bits13 = 0b0001_0000,
}

impl Resolution {
    pub const fn format(self) -> FixedPoint {
        match self {
            Resolution::Bits12 => BITS12,
            Resolution::Bits13 => BITS13,
        }
    }
}

impl BitField for Resolution {
    const MASK: u8 = 0b0001_0000;

    fn from_bits(bits: u8) -> Self {
        if bits != 0 {
            Resolution::Bits13
        } else {
            Resolution::Bits12
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Decodes a temperature or limit register.
///
/// ```
/// use tmp102::{decode_temperature, Celsius, Resolution};
///
/// assert_eq!(decode_temperature(Resolution::Bits12, [0x19, 0x00]), Celsius(25.0));
/// assert_eq!(decode_temperature(Resolution::Bits13, [0x0C, 0x80]), Celsius(25.0));
/// ```
pub fn decode_temperature(resolution: Resolution, raw: [u8; 2]) -> Celsius {
    resolution.format().decode(u16::from_be_bytes(raw))
}

/// Encodes a temperature into a limit register, rounding to the nearest
/// step and saturating at the ends of the range.
pub fn encode_temperature(resolution: Resolution, temperature: Celsius) -> [u8; 2] {
    resolution.format().encode(temperature).to_be_bytes()
}
