//! Style palette: semantic color names mapped to RGB triples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Six-digit uppercase hex, as used by `a:srgbClr`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Semantic color names understood by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Primary,
    Secondary,
    Accent,
    Warning,
    Danger,
    Light,
    Dark,
    White,
}

/// Fixed lookup from [`Swatch`] to [`Rgb`], shared read-only by every template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    primary: Rgb,
    secondary: Rgb,
    accent: Rgb,
    warning: Rgb,
    danger: Rgb,
    light: Rgb,
    dark: Rgb,
    white: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb::new(41, 128, 185),
            secondary: Rgb::new(52, 73, 94),
            accent: Rgb::new(46, 204, 113),
            warning: Rgb::new(241, 196, 15),
            danger: Rgb::new(231, 76, 60),
            light: Rgb::new(236, 240, 241),
            dark: Rgb::new(44, 62, 80),
            white: Rgb::new(255, 255, 255),
        }
    }
}

impl Palette {
    /// Create the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a semantic name to its color.
    pub fn color(&self, swatch: Swatch) -> Rgb {
        match swatch {
            Swatch::Primary => self.primary,
            Swatch::Secondary => self.secondary,
            Swatch::Accent => self.accent,
            Swatch::Warning => self.warning,
            Swatch::Danger => self.danger,
            Swatch::Light => self.light,
            Swatch::Dark => self.dark,
            Swatch::White => self.white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(41, 128, 185).hex(), "2980B9");
        assert_eq!(Rgb::new(0, 0, 0).hex(), "000000");
        assert_eq!(Rgb::new(255, 255, 255).to_string(), "#FFFFFF");
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::new();
        assert_eq!(palette.color(Swatch::Danger), Rgb::new(231, 76, 60));
        assert_eq!(palette.color(Swatch::Light), Rgb::new(236, 240, 241));
    }

    #[test]
    fn test_swatch_serde_name() {
        let json = serde_json::to_string(&Swatch::Accent).unwrap();
        assert_eq!(json, "\"accent\"");
        let parsed: Swatch = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Swatch::Warning);
    }
}
