use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// 0xAARRGGBB with alpha forced opaque.
    #[inline(always)]
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline(always)]
    pub fn from_argb(word: u32) -> Self {
        let [b, g, r, a] = word.to_le_bytes();
        Color { r, g, b, a }
    }
}

/// Scale r, g and b by `intensity`, clamped to [0, 1]. Alpha is left alone.
#[inline(always)]
pub fn apply_lighting(color: Color, intensity: f32) -> Color {
    let intensity = intensity.clamp(0.0, 1.0);
    Color {
        r: (color.r as f32 * intensity) as u8,
        g: (color.g as f32 * intensity) as u8,
        b: (color.b as f32 * intensity) as u8,
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let c = Color::new(0x12, 0x34, 0x56, 0x00);
        assert_eq!(c.to_argb(), 0xFF12_3456);
        assert_eq!(Color::from_argb(0xFF12_3456), Color::new(0x12, 0x34, 0x56, 0xFF));
    }

    #[test]
    fn test_lighting_scales_channels() {
        let lit = apply_lighting(Color::new(200, 100, 50, 7), 0.5);
        assert_eq!(lit, Color::new(100, 50, 25, 7));
    }

    #[test]
    fn test_lighting_is_clamped() {
        assert_eq!(apply_lighting(WHITE, 3.0), WHITE);
        assert_eq!(apply_lighting(WHITE, -1.0), Color::new(0, 0, 0, 255));
    }
}
