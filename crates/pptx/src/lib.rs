//! PPTX (Office Open XML) writer for generated decks.
//!
//! Builds presentations in memory, writes them as .pptx packages, and
//! reads them back as a per-slide text outline.

pub mod document;
mod package;
mod parts;
pub mod reader;
mod slide_xml;
mod xml;

pub use document::{
    Alignment, DocumentProperties, Fill, Font, Gradient, Layout, Outline, Paragraph,
    Presentation, Shape, ShapeKind, Slide, TextFrame,
};
pub use reader::{PptxReader, SlideOutline};
