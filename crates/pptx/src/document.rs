//! In-memory presentation model.
//!
//! Slides hold shapes in z-order; each shape may carry a text frame made
//! of paragraphs with paragraph-wide font attributes.

use deck_core::theme;
use deck_core::{Emu, Pt, Rect, Rgb};

/// Document metadata written to `docProps/core.xml`.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    pub title: String,
    pub author: String,
    pub subject: String,
}

/// A presentation under construction.
#[derive(Debug)]
pub struct Presentation {
    pub(crate) slides: Vec<Slide>,
    slide_width: Emu,
    slide_height: Emu,
    pub properties: DocumentProperties,
}

impl Presentation {
    /// Create an empty 10" x 7.5" presentation.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: Emu::inches(theme::SLIDE_WIDTH_IN),
            slide_height: Emu::inches(theme::SLIDE_HEIGHT_IN),
            properties: DocumentProperties::default(),
        }
    }

    /// Append a slide using the given layout and return it for population.
    pub fn add_slide(&mut self, layout: Layout) -> &mut Slide {
        let id = 256 + self.slides.len() as u32;
        log::debug!("Adding slide {} ({:?} layout)", self.slides.len() + 1, layout);
        self.slides.push(Slide::new(id, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

/// Slide layouts available in the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No placeholders.
    Blank,
}

/// A single slide.
#[derive(Debug)]
pub struct Slide {
    id: u32,
    layout: Layout,
    background: Option<Fill>,
    shapes: Vec<Shape>,
}

impl Slide {
    fn new(id: u32, layout: Layout) -> Self {
        Self {
            id,
            layout,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Slide id as written to `p:sldId/@id`.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn background(&self) -> Option<&Fill> {
        self.background.as_ref()
    }

    /// Replace the slide background.
    pub fn set_background(&mut self, fill: Fill) {
        self.background = Some(fill);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Add an unfilled, unbordered text box.
    pub fn add_text_box(&mut self, frame: Rect) -> &mut Shape {
        let id = self.next_shape_id();
        let name = format!("TextBox {}", id - 1);
        self.push(Shape {
            id,
            name,
            kind: ShapeKind::TextBox,
            frame,
            fill: Fill::None,
            outline: Outline::Default,
            text: TextFrame::default(),
        })
    }

    /// Add a preset geometry shape.
    pub fn add_shape(&mut self, kind: ShapeKind, frame: Rect) -> &mut Shape {
        let id = self.next_shape_id();
        let name = format!("{} {}", kind.display_name(), id - 1);
        self.push(Shape {
            id,
            name,
            kind,
            frame,
            fill: Fill::None,
            outline: Outline::Default,
            text: TextFrame::default(),
        })
    }

    // Id 1 belongs to the group shape that roots the shape tree.
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    fn push(&mut self, shape: Shape) -> &mut Shape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }
}

/// Kinds of shapes that can be placed on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    TextBox,
    Rectangle,
}

impl ShapeKind {
    fn display_name(self) -> &'static str {
        match self {
            Self::TextBox => "TextBox",
            Self::Rectangle => "Rectangle",
        }
    }

    /// Preset geometry name for `a:prstGeom/@prst`.
    pub(crate) fn preset(self) -> &'static str {
        match self {
            Self::TextBox | Self::Rectangle => "rect",
        }
    }
}

/// A fill for a shape or slide background.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Explicitly transparent.
    None,
    Solid(Rgb),
    Gradient(Gradient),
}

/// A two-stop linear gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Degrees counter-clockwise from horizontal.
    pub angle: f64,
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    /// The angle as stored in `a:lin/@ang`: clockwise, 60000ths of a degree.
    pub fn ooxml_angle(&self) -> i64 {
        let clockwise = (360.0 - self.angle).rem_euclid(360.0);
        (clockwise * 60_000.0).round() as i64
    }
}

/// Outline of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Inherit from the shape style.
    Default,
    /// No outline.
    Hidden,
    Solid { color: Rgb, width: Emu },
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct Shape {
    id: u32,
    name: String,
    kind: ShapeKind,
    frame: Rect,
    fill: Fill,
    outline: Outline,
    text: TextFrame,
}

impl Shape {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text
    }

    pub fn set_fill(&mut self, fill: Fill) -> &mut Self {
        self.fill = fill;
        self
    }

    pub fn set_outline(&mut self, outline: Outline) -> &mut Self {
        self.outline = outline;
        self
    }
}

/// Text content of a shape.
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

impl TextFrame {
    /// Replace all text, one paragraph per `\n`-separated line.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = text.split('\n').map(Paragraph::new).collect();
    }

    /// Append a paragraph and return it for styling.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new(text));
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    /// Full text, paragraphs joined by `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub(crate) fn ooxml(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Font attributes; `None` inherits from the master.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub name: Option<String>,
    pub size: Option<Pt>,
    pub bold: Option<bool>,
    pub color: Option<Rgb>,
}

/// A paragraph with a single run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub level: u8,
    pub alignment: Option<Alignment>,
    pub font: Font,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 0,
            alignment: None,
            font: Font::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), Emu(9_144_000));
        assert_eq!(pres.slide_height(), Emu(6_858_000));
    }

    #[test]
    fn test_add_slide_assigns_ids() {
        let mut pres = Presentation::new();
        assert_eq!(pres.add_slide(Layout::Blank).id(), 256);
        assert_eq!(pres.add_slide(Layout::Blank).id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_shape_ids_and_names() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide(Layout::Blank);
        let bar = slide.add_shape(ShapeKind::Rectangle, Rect::inches(0.0, 0.0, 10.0, 1.2));
        assert_eq!(bar.id(), 2);
        assert_eq!(bar.name(), "Rectangle 1");
        let text = slide.add_text_box(Rect::inches(0.5, 0.2, 3.0, 0.4));
        assert_eq!(text.id(), 3);
        assert_eq!(text.name(), "TextBox 2");
        assert_eq!(slide.shapes().len(), 2);
    }

    #[test]
    fn test_set_text_splits_paragraphs() {
        let mut frame = TextFrame::default();
        frame.set_text("Software Engineering Project\nNovember 2025");
        assert_eq!(frame.paragraphs().len(), 2);
        assert_eq!(frame.paragraphs()[1].text, "November 2025");
        assert_eq!(frame.text(), "Software Engineering Project\nNovember 2025");
    }

    #[test]
    fn test_set_text_keeps_blank_lines() {
        let mut frame = TextFrame::default();
        frame.set_text("a\n\nb");
        assert_eq!(frame.paragraphs().len(), 3);
        assert_eq!(frame.paragraphs()[1].text, "");
    }

    #[test]
    fn test_gradient_angle_is_clockwise() {
        let gradient = Gradient {
            angle: 45.0,
            start: Rgb::new(0, 0, 0),
            end: Rgb::new(255, 255, 255),
        };
        assert_eq!(gradient.ooxml_angle(), 18_900_000);

        let flat = Gradient { angle: 0.0, ..gradient };
        assert_eq!(flat.ooxml_angle(), 0);
    }
}
