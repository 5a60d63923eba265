//! Opening and closing slides: gradient background with centered text.

use crate::background::{paint_background, Backdrop};
use crate::frame::{add_styled_text, TextStyle};
use deck_core::theme;
use deck_core::{Pt, Rect};
use deck_pptx::{Layout, Presentation, Slide};

/// Which end of the deck a hero slide sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroLayout {
    Opening,
    Closing,
}

impl HeroLayout {
    fn subtitle_size(self) -> Pt {
        match self {
            Self::Opening => theme::SUBTITLE_SIZE,
            Self::Closing => theme::CLOSING_SUBTITLE_SIZE,
        }
    }

    fn footer_frame(self) -> Rect {
        match self {
            Self::Opening => theme::title_footer(),
            Self::Closing => theme::closing_footer(),
        }
    }
}

/// Text of a hero slide. The footer may span several lines.
#[derive(Debug, Clone, Copy)]
pub struct HeroText {
    pub layout: HeroLayout,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer: &'static str,
}

/// Add a hero slide to the presentation.
pub fn hero_slide<'a>(presentation: &'a mut Presentation, hero: &HeroText) -> &'a mut Slide {
    let slide = presentation.add_slide(Layout::Blank);
    paint_background(
        slide,
        Backdrop::Gradient(theme::PRIMARY_GREEN, theme::ACCENT_GREEN),
    );

    add_styled_text(
        slide,
        theme::hero_title(),
        hero.title,
        TextStyle::centered(theme::HERO_SIZE).bold(),
    );
    add_styled_text(
        slide,
        theme::hero_subtitle(),
        hero.subtitle,
        TextStyle::centered(hero.layout.subtitle_size()),
    );
    add_styled_text(
        slide,
        hero.layout.footer_frame(),
        hero.footer,
        TextStyle::centered(theme::FOOTER_SIZE),
    );

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CLOSING, OPENING};
    use deck_pptx::{Alignment, Fill};

    #[test]
    fn test_opening_slide() {
        let mut pres = Presentation::new();
        let slide = hero_slide(&mut pres, &OPENING);

        assert!(matches!(slide.background(), Some(Fill::Gradient(_))));
        let shapes = slide.shapes();
        assert_eq!(shapes.len(), 3);

        let title = &shapes[0].text_frame().paragraphs()[0];
        assert_eq!(title.text, "MyWelly");
        assert_eq!(title.font.size, Some(theme::HERO_SIZE));
        assert_eq!(title.font.bold, Some(true));
        assert_eq!(title.alignment, Some(Alignment::Center));

        let footer = shapes[2].text_frame();
        assert_eq!(footer.paragraphs().len(), 2);
        assert!(footer
            .paragraphs()
            .iter()
            .all(|p| p.font.size == Some(theme::FOOTER_SIZE) && p.font.color == Some(theme::WHITE)));
    }

    #[test]
    fn test_closing_slide_uses_closing_geometry() {
        let mut pres = Presentation::new();
        let slide = hero_slide(&mut pres, &CLOSING);
        let shapes = slide.shapes();

        let subtitle = &shapes[1].text_frame().paragraphs()[0];
        assert_eq!(subtitle.text, "Questions?");
        assert_eq!(subtitle.font.size, Some(theme::CLOSING_SUBTITLE_SIZE));

        assert_eq!(shapes[2].frame(), theme::closing_footer());
        assert_eq!(shapes[2].text_frame().paragraphs().len(), 4);
    }
}
