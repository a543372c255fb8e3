//! Lengths and rectangles in OOXML units.

use serde::{Deserialize, Serialize};

/// English Metric Units, the native OOXML length.
pub type Emu = i64;

/// EMUs per inch.
pub const EMU_PER_INCH: Emu = 914_400;

/// EMUs per typographic point.
pub const EMU_PER_POINT: Emu = 12_700;

/// Convert inches to EMUs, rounding to the nearest unit.
pub fn inches(value: f64) -> Emu {
    (value * EMU_PER_INCH as f64).round() as Emu
}

/// Convert points to EMUs, rounding to the nearest unit.
pub fn points(value: f64) -> Emu {
    (value * EMU_PER_POINT as f64).round() as Emu
}

/// Position and size of a shape on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Rect {
    /// Create a rectangle from EMU values.
    pub fn new(x: Emu, y: Emu, width: Emu, height: Emu) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from inch values.
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(inches(x), inches(y), inches(width), inches(height))
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> Emu {
        self.y + self.height
    }

    /// Right edge (x + width).
    pub fn right(&self) -> Emu {
        self.x + self.width
    }

    /// Whether two rectangles share any area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(7.5), 6_858_000);
        assert_eq!(inches(0.3), 274_320);
    }

    #[test]
    fn test_points() {
        assert_eq!(points(12.0), 152_400);
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::from_inches(0.5, 1.5, 9.0, 5.0);
        let b = Rect::from_inches(0.5, 3.5, 9.0, 2.5);
        let c = Rect::from_inches(0.5, 1.5, 9.0, 1.8);
        assert!(a.overlaps(&b));
        assert!(!c.overlaps(&b));
    }
}
