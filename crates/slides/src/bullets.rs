//! Rendering bullet lines into a slide's body text box.

use deck_core::bullets::IndentLevel;
use deck_core::{theme, BulletLine, Pt, Rgb};
use deck_pptx::Slide;

/// A bullet line resolved to concrete paragraph attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledParagraph {
    pub text: String,
    pub level: IndentLevel,
    pub size: Pt,
    pub color: Rgb,
    pub bold: bool,
}

/// Resolve each line to one paragraph, in order.
pub fn style_paragraphs(lines: &[BulletLine]) -> Vec<StyledParagraph> {
    lines
        .iter()
        .map(|line| {
            let style = line.style();
            StyledParagraph {
                text: line.text.clone(),
                level: line.level,
                size: style.size,
                color: style.color,
                bold: style.bold,
            }
        })
        .collect()
}

/// Add the wrapped body text box to a framed slide, one paragraph per line.
pub fn render_bullets(slide: &mut Slide, lines: &[BulletLine]) {
    let frame = slide.add_text_box(theme::bullet_body()).text_frame_mut();
    frame.word_wrap = true;

    for styled in style_paragraphs(lines) {
        let paragraph = frame.add_paragraph(styled.text);
        paragraph.level = styled.level.as_u8();
        paragraph.font.size = Some(styled.size);
        paragraph.font.color = Some(styled.color);
        paragraph.font.bold = Some(styled.bold);
    }
}
