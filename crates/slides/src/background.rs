//! Slide background painting.

use deck_core::{theme, Rgb};
use deck_pptx::{Fill, Gradient, Slide};

/// Background treatment for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Single flat color.
    Flat(Rgb),
    /// Two-stop linear gradient at the theme angle.
    Gradient(Rgb, Rgb),
}

/// Paint a slide's background.
pub fn paint_background(slide: &mut Slide, backdrop: Backdrop) {
    let fill = match backdrop {
        Backdrop::Flat(color) => Fill::Solid(color),
        Backdrop::Gradient(start, end) => Fill::Gradient(Gradient {
            angle: theme::GRADIENT_ANGLE,
            start,
            end,
        }),
    };
    slide.set_background(fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_pptx::{Layout, Presentation};

    #[test]
    fn test_flat_background() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide(Layout::Blank);
        paint_background(slide, Backdrop::Flat(theme::WHITE));
        assert_eq!(slide.background(), Some(&Fill::Solid(theme::WHITE)));
    }

    #[test]
    fn test_gradient_background_uses_theme_angle() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide(Layout::Blank);
        paint_background(
            slide,
            Backdrop::Gradient(theme::PRIMARY_GREEN, theme::ACCENT_GREEN),
        );
        match slide.background() {
            Some(Fill::Gradient(g)) => {
                assert_eq!(g.angle, 45.0);
                assert_eq!(g.start, theme::PRIMARY_GREEN);
                assert_eq!(g.end, theme::ACCENT_GREEN);
            }
            other => panic!("unexpected background {:?}", other),
        }
    }

    #[test]
    fn test_repainting_replaces_background() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide(Layout::Blank);
        paint_background(slide, Backdrop::Flat(theme::WHITE));
        paint_background(slide, Backdrop::Flat(theme::DARK_GRAY));
        assert_eq!(slide.background(), Some(&Fill::Solid(theme::DARK_GRAY)));
    }
}
