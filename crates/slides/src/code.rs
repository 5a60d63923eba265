//! Code-block slides: a framed slide with one shaded, bordered,
//! monospace text box.

use crate::frame::frame_slide;
use deck_core::{theme, Emu};
use deck_pptx::{Fill, Outline, Presentation, Slide};

/// Add a framed slide showing `code` verbatim.
pub fn code_slide<'a>(
    presentation: &'a mut Presentation,
    section: &str,
    title: &str,
    code: &str,
) -> &'a mut Slide {
    let slide = frame_slide(presentation, section, title);

    let shape = slide.add_text_box(theme::code_body());
    let frame = shape.text_frame_mut();
    frame.set_text(code);
    frame.word_wrap = true;
    for paragraph in frame.paragraphs_mut() {
        paragraph.font.name = Some(theme::CODE_FONT.to_string());
        paragraph.font.size = Some(theme::CODE_SIZE);
        paragraph.font.color = Some(theme::DARK_GRAY);
    }

    shape
        .set_fill(Fill::Solid(theme::CODE_BACKGROUND))
        .set_outline(Outline::Solid {
            color: theme::LIGHT_GREEN,
            width: Emu::points(theme::CODE_BORDER_WIDTH_PT),
        });

    slide
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNIPPET: &str = "@Service\npublic class A {\n\n    void run() {}\n}";

    #[test]
    fn test_code_slide_preserves_text() {
        let mut pres = Presentation::new();
        let slide = code_slide(&mut pres, "Implementation", "Snippet", SNIPPET);

        // Header bar, section, title, code box.
        assert_eq!(slide.shapes().len(), 4);
        let code = &slide.shapes()[3];
        assert_eq!(code.text_frame().text(), SNIPPET);
        assert_eq!(code.text_frame().paragraphs().len(), 5);
        assert_eq!(code.text_frame().paragraphs()[3].text, "    void run() {}");
    }

    #[test]
    fn test_code_slide_styling() {
        let mut pres = Presentation::new();
        let slide = code_slide(&mut pres, "Implementation", "Snippet", SNIPPET);
        let code = &slide.shapes()[3];

        assert_eq!(code.frame(), theme::code_body());
        assert!(code.text_frame().word_wrap);
        assert_eq!(code.fill(), &Fill::Solid(theme::CODE_BACKGROUND));
        assert_eq!(
            code.outline(),
            &Outline::Solid {
                color: theme::LIGHT_GREEN,
                width: Emu(25_400)
            }
        );
        for paragraph in code.text_frame().paragraphs() {
            assert_eq!(paragraph.font.name.as_deref(), Some("Courier New"));
            assert_eq!(paragraph.font.size, Some(theme::CODE_SIZE));
            assert_eq!(paragraph.font.color, Some(theme::DARK_GRAY));
        }
    }
}
