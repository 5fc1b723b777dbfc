//! Color type for the face palette

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA components
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a packed 0xRRGGBB value as carried by configuration
    /// messages. The alpha channel is forced opaque.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Encode as a packed 0xRRGGBB value (alpha dropped)
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_channels() {
        let c = Color::from_hex(0xCD2231);
        assert_eq!(c, Color::rgba(205, 34, 49, 255));
    }

    #[test]
    fn test_hex_roundtrip() {
        for hex in [0x000000, 0xFFFFFF, 0x3122CD, 0x80FF01] {
            assert_eq!(Color::from_hex(hex).to_hex(), hex);
        }
    }

    #[test]
    fn test_from_hex_ignores_high_byte() {
        // Inbound values are 32-bit; only the low 24 bits carry color
        assert_eq!(Color::from_hex(0xFF00FF00), Color::rgb(0, 255, 0));
    }
}
