//! Palette and persisted-settings type definitions
//!
//! The palette is the set of three user-configurable colors. It is
//! mirrored into flash as a postcard-serialized `FaceSettings` record
//! on every configuration update and loaded once at startup.

use crate::color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current settings record version
pub const SETTINGS_VERSION: u8 = 1;

/// The three configurable face colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Canvas background fill
    pub background: Color,
    /// Color of the two hour shapes
    pub hour: Color,
    /// Color of the two minute shapes
    pub minute: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            hour: Color::rgba(205, 34, 49, 255),
            minute: Color::rgba(49, 34, 205, 255),
        }
    }
}

impl Palette {
    /// Apply a configuration update. Each entry is an optional packed
    /// 0xRRGGBB value; absent entries leave the color unchanged.
    ///
    /// This is the only mutation point for the palette.
    pub fn apply_hex(&mut self, background: Option<u32>, hour: Option<u32>, minute: Option<u32>) {
        if let Some(hex) = background {
            self.background = Color::from_hex(hex);
        }
        if let Some(hex) = hour {
            self.hour = Color::from_hex(hex);
        }
        if let Some(hex) = minute {
            self.minute = Color::from_hex(hex);
        }
    }
}

/// Persisted settings record
///
/// Stored in flash under a single well-known key. A missing, corrupt,
/// or version-mismatched record falls back to `FaceSettings::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceSettings {
    /// Record format version, checked on load
    pub version: u8,
    /// The persisted palette
    pub palette: Palette,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            palette: Palette::default(),
        }
    }
}

impl FaceSettings {
    /// Check whether this record was written by a compatible firmware
    pub fn is_supported(&self) -> bool {
        self.version == SETTINGS_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.background, Color::WHITE);
        assert_eq!(palette.hour, Color::rgba(205, 34, 49, 255));
        assert_eq!(palette.minute, Color::rgba(49, 34, 205, 255));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut palette = Palette::default();
        palette.apply_hex(None, Some(0x112233), None);

        assert_eq!(palette.background, Color::WHITE);
        assert_eq!(palette.hour, Color::from_hex(0x112233));
        assert_eq!(palette.minute, Palette::default().minute);
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let mut palette = Palette::default();
        palette.apply_hex(None, None, None);
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_default_settings_supported() {
        assert!(FaceSettings::default().is_supported());
    }

    #[test]
    fn test_version_mismatch_unsupported() {
        let settings = FaceSettings {
            version: SETTINGS_VERSION + 1,
            ..Default::default()
        };
        assert!(!settings.is_supported());
    }
}
