/// Offset between the Celsius and Kelvin scales.
const KELVIN_OFFSET: f32 = 273.15;

/// A temperature in degrees Celsius.
///
/// Every driver reports this unit; conversions to other scales are derived
/// from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Celsius(pub f32);

impl Celsius {
    /// Returns the temperature in Kelvin (`K = C + 273.15`).
    pub fn to_kelvin(self) -> f32 {
        self.0 + KELVIN_OFFSET
    }

    /// Returns the temperature in degrees Fahrenheit (`F = C * 1.8 + 32`).
    pub fn to_fahrenheit(self) -> f32 {
        self.0 * 1.8 + 32.0
    }
}

impl From<f32> for Celsius {
    fn from(degrees: f32) -> Self {
        Self(degrees)
    }
}

impl From<Celsius> for f32 {
    fn from(celsius: Celsius) -> Self {
        celsius.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_in_other_scales() {
        let t = Celsius(0.0);
        assert_eq!(t.to_kelvin(), 273.15);
        assert_eq!(t.to_fahrenheit(), 32.0);
    }

    #[test]
    fn boiling_point_in_fahrenheit() {
        assert_eq!(Celsius(100.0).to_fahrenheit(), 212.0);
    }

    #[test]
    fn scales_meet_at_minus_forty() {
        assert_eq!(Celsius(-40.0).to_fahrenheit(), -40.0);
    }

    #[test]
    fn converts_from_and_into_f32() {
        let t: Celsius = 21.5.into();
        assert_eq!(t, Celsius(21.5));
        assert_eq!(f32::from(t), 21.5);
    }
}
