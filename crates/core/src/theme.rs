//! Green theme palette, slide geometry, and type sizes for the deck.

use crate::units::{Pt, Rect, Rgb};

// Palette
pub const PRIMARY_GREEN: Rgb = Rgb::new(45, 106, 79);
pub const LIGHT_GREEN: Rgb = Rgb::new(82, 183, 136);
pub const ACCENT_GREEN: Rgb = Rgb::new(149, 213, 178);
pub const DARK_GREEN: Rgb = Rgb::new(27, 67, 50);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const LIGHT_GRAY: Rgb = Rgb::new(248, 249, 250);
pub const DARK_GRAY: Rgb = Rgb::new(51, 51, 51);
pub const CODE_BACKGROUND: Rgb = Rgb::new(245, 245, 245);

/// Slide width in inches (4:3).
pub const SLIDE_WIDTH_IN: f64 = 10.0;
/// Slide height in inches (4:3).
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// Angle of the hero-slide gradient, in degrees counter-clockwise.
pub const GRADIENT_ANGLE: f64 = 45.0;

pub const CODE_FONT: &str = "Courier New";
pub const CODE_BORDER_WIDTH_PT: f64 = 2.0;

// Type sizes
pub const HERO_SIZE: Pt = Pt(72.0);
pub const SUBTITLE_SIZE: Pt = Pt(28.0);
pub const CLOSING_SUBTITLE_SIZE: Pt = Pt(36.0);
pub const FOOTER_SIZE: Pt = Pt(18.0);
pub const FRAME_TITLE_SIZE: Pt = Pt(32.0);
pub const SECTION_LABEL_SIZE: Pt = Pt(16.0);
pub const BODY_SIZE: Pt = Pt(16.0);
pub const CODE_SIZE: Pt = Pt(11.0);

/// Header bar across the top of every framed slide.
pub fn header_bar() -> Rect {
    Rect::inches(0.0, 0.0, SLIDE_WIDTH_IN, 1.2)
}

/// Small section label, upper left inside the header bar.
pub fn section_label() -> Rect {
    Rect::inches(0.5, 0.2, 3.0, 0.4)
}

/// Frame title, vertically centered inside the header bar.
pub fn frame_title() -> Rect {
    Rect::inches(0.5, 0.5, 9.0, 0.6)
}

/// Body area holding a bullet list.
pub fn bullet_body() -> Rect {
    Rect::inches(0.8, 1.7, 8.4, 5.3)
}

/// Body area holding a code block.
pub fn code_body() -> Rect {
    Rect::inches(0.5, 1.5, 9.0, 5.5)
}

pub fn hero_title() -> Rect {
    Rect::inches(1.0, 2.5, 8.0, 1.0)
}

pub fn hero_subtitle() -> Rect {
    Rect::inches(1.0, 3.7, 8.0, 0.8)
}

pub fn title_footer() -> Rect {
    Rect::inches(1.0, 6.0, 8.0, 1.0)
}

pub fn closing_footer() -> Rect {
    Rect::inches(1.0, 5.5, 8.0, 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Emu;

    #[test]
    fn test_header_spans_slide_width() {
        assert_eq!(header_bar().cx, Emu::inches(SLIDE_WIDTH_IN));
        assert_eq!(header_bar().x, Emu(0));
    }

    #[test]
    fn test_header_text_fits_in_bar() {
        let bar = header_bar();
        for rect in [section_label(), frame_title()] {
            assert!(rect.y.get() + rect.cy.get() <= bar.y.get() + bar.cy.get());
        }
    }

    #[test]
    fn test_bodies_sit_below_header() {
        let bar_bottom = header_bar().cy.get();
        assert!(bullet_body().y.get() > bar_bottom);
        assert!(code_body().y.get() > bar_bottom);
    }
}
