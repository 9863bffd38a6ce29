//! Packed 32-bit ARGB color, 8 bits per channel, alpha significant.
//!
//! Matchers compare colors by exact equality only; there is no tolerance and
//! no color-space conversion. The channel layout matches the usual packed
//! ARGB convention: alpha in bits 24..32, red 16..24, green 8..16, blue 0..8.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use image::Rgba;
use serde::{Deserialize, Serialize};

/// A packed ARGB color value.
///
/// `Color` is a transparent wrapper over the packed `u32`, so a slice of
/// packed pixels can be reinterpreted as colors without copying (via
/// [`bytemuck`]), and it serializes as the bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable, Default,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);

    /// Wrap an already-packed ARGB value.
    pub const fn from_argb(packed: u32) -> Self {
        Color(packed)
    }

    /// Pack individual 8-bit channels.
    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// The packed ARGB representation.
    pub const fn to_argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Color(((a as u32) << 24) | (self.0 & 0x00FF_FFFF))
    }

    /// Convert to the `image` crate's channel-ordered pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.red(), self.green(), self.blue(), self.alpha()])
    }

    /// Convert from the `image` crate's channel-ordered pixel.
    pub fn from_rgba(pixel: Rgba<u8>) -> Self {
        let Rgba([r, g, b, a]) = pixel;
        Color::from_argb8(a, r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_accessors_match_packing() {
        let c = Color::from_argb8(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb(), 0x1234_5678);
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.red(), 0x34);
        assert_eq!(c.green(), 0x56);
        assert_eq!(c.blue(), 0x78);
    }

    #[test]
    fn rgba_round_trip_preserves_channels() {
        let c = Color::from_argb(0x80FF_C001);
        assert_eq!(Color::from_rgba(c.to_rgba()), c);
    }

    #[test]
    fn with_alpha_leaves_rgb_untouched() {
        let c = Color::RED.with_alpha(0x40);
        assert_eq!(c.to_argb(), 0x40FF_0000);
    }

    #[test]
    fn display_is_packed_hex() {
        assert_eq!(Color::from_argb(0xFF00_A0B0).to_string(), "#FF00A0B0");
    }

    #[test]
    fn serializes_as_packed_integer() {
        let json = serde_json::to_string(&Color::BLACK).unwrap();
        assert_eq!(json, "4278190080");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::BLACK);
    }
}
