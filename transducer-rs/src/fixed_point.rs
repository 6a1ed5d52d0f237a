use crate::units::Celsius;

const SIGN_BIT: u16 = 0x8000;

/// A signed two's-complement temperature format stored in a 16-bit word.
///
/// The temperature code occupies the top `16 - shift` bits of the word,
/// sign bit at bit 15; the `shift` low bits are padding or status flags and
/// are discarded on decode. One code step equals `1 / counts_per_degree`
/// degrees Celsius.
///
/// ```
/// use transducer::{Celsius, FixedPoint};
///
/// // 13 significant bits, 1/16 °C per step.
/// let format = FixedPoint::new(3, 16.0);
/// assert_eq!(format.decode(0x0598), Celsius(11.1875));
/// assert_eq!(format.encode(Celsius(11.1875)), 0x0598);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedPoint {
    shift: u32,
    counts_per_degree: f32,
}

impl FixedPoint {
    /// Creates a format whose code is left-aligned in the word above `shift`
    /// padding bits.
    ///
    /// `shift` must be below 16.
    pub const fn new(shift: u32, counts_per_degree: f32) -> Self {
        assert!(shift < 16, "shift leaves no code bits");
        Self {
            shift,
            counts_per_degree,
        }
    }

    /// Temperature represented by one code step.
    pub fn step(&self) -> f32 {
        1.0 / self.counts_per_degree
    }

    /// Smallest representable code.
    pub fn min_code(&self) -> i32 {
        i32::from(i16::MIN) >> self.shift
    }

    /// Largest representable code.
    pub fn max_code(&self) -> i32 {
        i32::from(i16::MAX) >> self.shift
    }

    /// Decodes a raw register word into a temperature.
    ///
    /// The word is reinterpreted as `i16` and shifted arithmetically so the
    /// sign survives the shift.
    pub fn decode(&self, raw: u16) -> Celsius {
        let mut code = (raw as i16) >> self.shift;
        if raw & SIGN_BIT != 0 {
            // Bit 15 stays set for negative codes.
            code |= SIGN_BIT as i16;
        }
        Celsius(f32::from(code) / self.counts_per_degree)
    }

    /// Encodes a temperature into a raw register word.
    ///
    /// The value is rounded to the nearest code (halves away from zero) and
    /// saturated to the representable range. Padding bits are zero.
    pub fn encode(&self, temperature: Celsius) -> u16 {
        let code = round_half_away(temperature.0 * self.counts_per_degree)
            .clamp(self.min_code(), self.max_code());
        let mut raw = ((code << self.shift) as i16) as u16;
        if code < 0 {
            raw |= SIGN_BIT;
        }
        raw
    }
}

/// `f32::round` lives in `std`; this is the `core` equivalent for the
/// ranges a 16-bit register can hold.
fn round_half_away(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
