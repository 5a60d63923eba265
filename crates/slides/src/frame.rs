//! The slide frame shared by every content slide: white background, a
//! green header bar, a small section label, and a bold title.

use crate::background::{paint_background, Backdrop};
use deck_core::{theme, Pt, Rect, Rgb};
use deck_pptx::{Alignment, Fill, Layout, Outline, Presentation, ShapeKind, Slide};

/// Paragraph styling applied to every line of a text box.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    pub size: Pt,
    pub color: Rgb,
    pub bold: Option<bool>,
    pub alignment: Option<Alignment>,
}

impl TextStyle {
    pub fn new(size: Pt, color: Rgb) -> Self {
        Self {
            size,
            color,
            bold: None,
            alignment: None,
        }
    }

    /// White, centered text.
    pub fn centered(size: Pt) -> Self {
        Self {
            alignment: Some(Alignment::Center),
            ..Self::new(size, theme::WHITE)
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }
}

/// Add a text box holding `text`, one paragraph per line, all styled alike.
pub(crate) fn add_styled_text(slide: &mut Slide, frame: Rect, text: &str, style: TextStyle) {
    let text_frame = slide.add_text_box(frame).text_frame_mut();
    text_frame.set_text(text);
    for paragraph in text_frame.paragraphs_mut() {
        paragraph.font.size = Some(style.size);
        paragraph.font.color = Some(style.color);
        paragraph.font.bold = style.bold;
        paragraph.alignment = style.alignment;
    }
}

/// Add a blank slide with the header frame and return it for the body.
///
/// Section and title text are taken as-is; long text is not truncated.
pub fn frame_slide<'a>(presentation: &'a mut Presentation, section: &str, title: &str) -> &'a mut Slide {
    log::debug!("Framing slide {:?} / {:?}", section, title);
    let slide = presentation.add_slide(Layout::Blank);
    paint_background(slide, Backdrop::Flat(theme::WHITE));

    slide
        .add_shape(ShapeKind::Rectangle, theme::header_bar())
        .set_fill(Fill::Solid(theme::PRIMARY_GREEN))
        .set_outline(Outline::Hidden);

    add_styled_text(
        slide,
        theme::section_label(),
        section,
        TextStyle::new(theme::SECTION_LABEL_SIZE, theme::ACCENT_GREEN),
    );
    add_styled_text(
        slide,
        theme::frame_title(),
        title,
        TextStyle::new(theme::FRAME_TITLE_SIZE, theme::WHITE).bold(),
    );

    slide
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let mut pres = Presentation::new();
        let slide = frame_slide(&mut pres, "Phase 1", "Requirements Analysis");

        assert_eq!(slide.background(), Some(&Fill::Solid(theme::WHITE)));

        let shapes = slide.shapes();
        assert_eq!(shapes.len(), 3);

        let bar = &shapes[0];
        assert_eq!(bar.kind(), ShapeKind::Rectangle);
        assert_eq!(bar.frame(), theme::header_bar());
        assert_eq!(bar.fill(), &Fill::Solid(theme::PRIMARY_GREEN));
        assert_eq!(bar.outline(), &Outline::Hidden);

        let section = &shapes[1].text_frame().paragraphs()[0];
        assert_eq!(section.text, "Phase 1");
        assert_eq!(section.font.size, Some(theme::SECTION_LABEL_SIZE));
        assert_eq!(section.font.color, Some(theme::ACCENT_GREEN));
        assert_eq!(section.font.bold, None);

        let title = &shapes[2].text_frame().paragraphs()[0];
        assert_eq!(title.text, "Requirements Analysis");
        assert_eq!(title.font.size, Some(theme::FRAME_TITLE_SIZE));
        assert_eq!(title.font.bold, Some(true));
        assert_eq!(title.font.color, Some(theme::WHITE));
    }

    #[test]
    fn test_frame_accepts_arbitrary_text() {
        let long_title = "x".repeat(500);
        let mut pres = Presentation::new();
        let slide = frame_slide(&mut pres, "", &long_title);
        assert_eq!(slide.shapes()[1].text_frame().text(), "");
        assert_eq!(slide.shapes()[2].text_frame().text(), long_title);
    }
}
