//! Measurement and color types used to place shapes on a slide.

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Emu(pub i64);

impl Emu {
    /// Convert inches to EMUs, rounding to the nearest unit.
    pub fn inches(value: f64) -> Self {
        Self((value * EMU_PER_INCH as f64).round() as i64)
    }

    /// Convert points to EMUs, rounding to the nearest unit.
    pub fn points(value: f64) -> Self {
        Self((value * EMU_PER_POINT as f64).round() as i64)
    }

    /// The raw EMU value.
    pub fn get(self) -> i64 {
        self.0
    }
}

/// A font size in points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pt(pub f64);

impl Pt {
    /// Size in hundredths of a point, as stored in `a:rPr/@sz`.
    pub fn hundredths(self) -> u32 {
        (self.0 * 100.0).round().max(0.0) as u32
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case `RRGGBB` form used by `a:srgbClr/@val`.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: Emu,
    pub y: Emu,
    pub cx: Emu,
    pub cy: Emu,
}

impl Rect {
    /// Build a rectangle from left, top, width, and height in inches.
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Emu::inches(x),
            y: Emu::inches(y),
            cx: Emu::inches(width),
            cy: Emu::inches(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(Emu::inches(1.0), Emu(914_400));
        assert_eq!(Emu::inches(10.0), Emu(9_144_000));
        assert_eq!(Emu::inches(7.5), Emu(6_858_000));
        assert_eq!(Emu::inches(1.2), Emu(1_097_280));
    }

    #[test]
    fn test_points_to_emu() {
        assert_eq!(Emu::points(2.0), Emu(25_400));
    }

    #[test]
    fn test_pt_hundredths() {
        assert_eq!(Pt(16.0).hundredths(), 1600);
        assert_eq!(Pt(11.0).hundredths(), 1100);
        assert_eq!(Pt(72.0).hundredths(), 7200);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(45, 106, 79).hex(), "2D6A4F");
        assert_eq!(Rgb::new(255, 255, 255).hex(), "FFFFFF");
        assert_eq!(Rgb::new(0, 5, 10).hex(), "00050A");
    }

    #[test]
    fn test_rect_inches() {
        let rect = Rect::inches(0.5, 0.2, 3.0, 0.4);
        assert_eq!(rect.x, Emu(457_200));
        assert_eq!(rect.y, Emu(182_880));
        assert_eq!(rect.cx, Emu(2_743_200));
        assert_eq!(rect.cy, Emu(365_760));
    }
}
