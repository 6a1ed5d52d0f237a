//! Read-only snapshots decoded from the status and ID registers.

use crate::registers::MANUFACTURER_ID;

const STATUS_LOW: u8 = 1 << 4;
const STATUS_HIGH: u8 = 1 << 5;
const STATUS_CRIT: u8 = 1 << 6;
const STATUS_RDY: u8 = 1 << 7;

/// Contents of the status register. Bits 3:0 are unused.
///
/// In interrupt mode the device clears the limit flags when the register
/// is read; the snapshot reflects the value before that read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// Temperature fell below T_LOW (bit 4).
    pub below_low: bool,
    /// Temperature rose above T_HIGH (bit 5).
    pub above_high: bool,
    /// Temperature rose above T_CRIT (bit 6).
    pub above_critical: bool,
    /// The /RDY bit (bit 7): set while no new conversion result has been
    /// written to the temperature register since it was last read.
    pub write_in_progress: bool,
}

impl Status {
    pub fn from_register(byte: u8) -> Self {
        Self {
            below_low: byte & STATUS_LOW != 0,
            above_high: byte & STATUS_HIGH != 0,
            above_critical: byte & STATUS_CRIT != 0,
            write_in_progress: byte & STATUS_RDY != 0,
        }
    }

    /// Returns `true` if any temperature limit flag is set.
    pub fn any_limit_exceeded(&self) -> bool {
        self.below_low || self.above_high || self.above_critical
    }
}

/// Contents of the ID register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipId {
    /// Bits 7:3.
    pub manufacturer_id: u8,
    /// Bits 2:0.
    pub revision: u8,
}

impl ChipId {
    pub fn from_register(byte: u8) -> Self {
        Self {
            manufacturer_id: byte >> 3,
            revision: byte & 0b111,
        }
    }

    /// Returns `true` if the manufacturer ID matches the ADT7410.
    pub fn is_adt7410(&self) -> bool {
        self.manufacturer_id == MANUFACTURER_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_all_flags_set() {
        let status = Status::from_register(0b1111_0000);
        assert!(status.below_low);
        assert!(status.above_high);
        assert!(status.above_critical);
        assert!(status.write_in_progress);
        assert!(status.any_limit_exceeded());
    }

    #[test]
    fn status_no_flags_set() {
        let status = Status::from_register(0x00);
        assert_eq!(status, Status::default());
        assert!(!status.any_limit_exceeded());
    }

    #[test]
    fn status_ignores_unused_low_nibble() {
        assert_eq!(Status::from_register(0x0F), Status::default());
        let status = Status::from_register(0b0100_1010);
        assert!(status.above_critical);
        assert!(!status.above_high);
    }

    #[test]
    fn chip_id_splits_manufacturer_and_revision() {
        let id = ChipId::from_register(0b1100_1010);
        assert_eq!(id.manufacturer_id, 25);
        assert_eq!(id.revision, 2);
        assert!(id.is_adt7410());
    }

    #[test]
    fn chip_id_of_other_part() {
        let id = ChipId::from_register(0x00);
        assert_eq!(id.revision, 0);
        assert!(!id.is_adt7410());
    }
}
