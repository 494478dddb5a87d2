//! Colors handed out to marks.

use crate::error::{SpatialError, SpatialResult};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PaletteColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for PaletteColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<PaletteColor> for Color {
    fn from(color: PaletteColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

// Tailwind 500 shades, ordered around the hue wheel.
const DEFAULT_COLORS: [PaletteColor; 12] = [
    PaletteColor::rgb(239, 68, 68),
    PaletteColor::rgb(249, 115, 22),
    PaletteColor::rgb(245, 158, 11),
    PaletteColor::rgb(132, 204, 22),
    PaletteColor::rgb(34, 197, 94),
    PaletteColor::rgb(20, 184, 166),
    PaletteColor::rgb(6, 182, 212),
    PaletteColor::rgb(59, 130, 246),
    PaletteColor::rgb(99, 102, 241),
    PaletteColor::rgb(168, 85, 247),
    PaletteColor::rgb(236, 72, 153),
    PaletteColor::rgb(120, 113, 108),
];

/// Ordered, non-empty list of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteColor>", into = "Vec<PaletteColor>")]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    pub fn try_new(colors: Vec<PaletteColor>) -> SpatialResult<Self> {
        if colors.is_empty() {
            return Err(SpatialError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// First color in palette order.
    pub fn first(&self) -> PaletteColor {
        self.colors[0]
    }

    /// Position of `color` in the palette, if it belongs to it.
    pub fn position(&self, color: PaletteColor) -> Option<usize> {
        self.colors.iter().position(|c| *c == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<PaletteColor>> for Palette {
    type Error = SpatialError;

    fn try_from(colors: Vec<PaletteColor>) -> SpatialResult<Self> {
        Self::try_new(colors)
    }
}

impl From<Palette> for Vec<PaletteColor> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.colors().len(), 12);
        assert_eq!(palette.first(), PaletteColor::rgb(239, 68, 68));
        assert_eq!(palette.position(PaletteColor::rgb(59, 130, 246)), Some(7));
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(Palette::try_new(Vec::new()), Err(SpatialError::EmptyPalette));
        assert!(serde_json::from_str::<Palette>("[]").is_err());
    }

    #[test]
    fn test_peniko_conversion() {
        let color = PaletteColor::new(10, 20, 30, 255);
        let peniko: Color = color.into();
        assert_eq!(PaletteColor::from(peniko), color);
    }

    #[test]
    fn test_serializes_as_list() {
        let palette = Palette::try_new(vec![PaletteColor::rgb(1, 2, 3)]).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"[{"r":1,"g":2,"b":3,"a":255}]"#);
        assert_eq!(serde_json::from_str::<Palette>(&json).unwrap(), palette);
    }
}
