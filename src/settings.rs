//! The calibration record as it lives in non-volatile storage.

/// Calibration settings for one scale.
///
/// The stored layout is a fixed contract independent of the target's
/// native struct layout: [`STORED_SIZE`](Self::STORED_SIZE) bytes,
/// little-endian, `calibration_factor` first. Encoding and decoding are
/// bit-exact, so a round trip through storage restores both fields
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Divisor converting offset-corrected raw counts to the weight unit.
    pub calibration_factor: f32,
    /// Raw-count offset representing the tare (empty platform) point.
    pub zero_factor: i32,
}

impl Settings {
    /// Size of the record as stored, in bytes.
    pub const STORED_SIZE: usize = 8;

    pub fn to_bytes(&self) -> [u8; Self::STORED_SIZE] {
        let mut bytes = [0; Self::STORED_SIZE];
        bytes[..4].copy_from_slice(&self.calibration_factor.to_le_bytes());
        bytes[4..].copy_from_slice(&self.zero_factor.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; Self::STORED_SIZE]) -> Self {
        let mut factor = [0; 4];
        factor.copy_from_slice(&bytes[..4]);
        let mut zero = [0; 4];
        zero.copy_from_slice(&bytes[4..]);
        Self {
            calibration_factor: f32::from_le_bytes(factor),
            zero_factor: i32::from_le_bytes(zero),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_little_endian_factor_first() {
        let settings = Settings {
            calibration_factor: 2.5,
            zero_factor: 1200,
        };
        // 2.5f32 = 0x40200000, 1200 = 0x000004B0
        assert_eq!(
            settings.to_bytes(),
            [0x00, 0x00, 0x20, 0x40, 0xB0, 0x04, 0x00, 0x00]
        );
    }

    #[test]
    fn round_trip_is_bit_exact() {
        let settings = Settings {
            calibration_factor: -417.03125,
            zero_factor: -8_388_608,
        };
        let restored = Settings::from_bytes(&settings.to_bytes());
        assert_eq!(
            restored.calibration_factor.to_bits(),
            settings.calibration_factor.to_bits()
        );
        assert_eq!(restored.zero_factor, settings.zero_factor);
    }

    #[test]
    fn erased_flash_pattern_decodes_to_nan_and_minus_one() {
        let settings = Settings::from_bytes(&[0xFF; Settings::STORED_SIZE]);
        assert!(settings.calibration_factor.is_nan());
        assert_eq!(settings.zero_factor, -1);
    }
}
