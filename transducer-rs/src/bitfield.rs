//! One enumerated field of a packed configuration byte.
//!
//! Configuration registers pack several independent settings into a single
//! byte. Each setting occupies a fixed bit range described by its
//! [`BitField::MASK`]; the variants carry their bit pattern *in place*
//! (already shifted into position), so encoding a whole register is the
//! bitwise OR of every field.

/// A setting stored in a fixed, contiguous bit range of a register byte.
///
/// `from_bits` receives the register byte already masked with
/// [`MASK`](BitField::MASK) and must map every possible masked value to a
/// variant, so decoding is total over all 256 register values.
pub trait BitField: Copy {
    /// Bits of the register byte owned by this field.
    const MASK: u8;

    /// Builds the field from the masked register bits.
    fn from_bits(bits: u8) -> Self;

    /// Returns the in-place bit pattern of this value.
    fn bits(self) -> u8;
}

/// Extracts field `F` from a register byte.
pub fn decode_field<F: BitField>(byte: u8) -> F {
    F::from_bits(byte & F::MASK)
}

/// Returns the bits field `F` contributes to a register byte.
pub fn encode_field<F: BitField>(field: F) -> u8 {
    field.bits() & F::MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Speed {
        Slow = 0b0000_0000,
        Medium = 0b0001_0000,
        Fast = 0b0010_0000,
        Turbo = 0b0011_0000,
    }

    impl BitField for Speed {
        const MASK: u8 = 0b0011_0000;

        fn from_bits(bits: u8) -> Self {
            match bits {
                0b0001_0000 => Speed::Medium,
                0b0010_0000 => Speed::Fast,
                0b0011_0000 => Speed::Turbo,
                _ => Speed::Slow,
            }
        }

        fn bits(self) -> u8 {
            self as u8
        }
    }

    #[test]
    fn decode_ignores_bits_outside_mask() {
        assert_eq!(decode_field::<Speed>(0b1110_1111), Speed::Fast);
        assert_eq!(decode_field::<Speed>(0b1100_1111), Speed::Slow);
    }

    #[test]
    fn encode_stays_inside_mask() {
        assert_eq!(encode_field(Speed::Turbo), 0b0011_0000);
        assert_eq!(encode_field(Speed::Medium) & !Speed::MASK, 0);
    }

    #[test]
    fn every_masked_value_round_trips() {
        for byte in 0..=u8::MAX {
            let field: Speed = decode_field(byte);
            assert_eq!(encode_field(field), byte & Speed::MASK);
        }
    }
}
