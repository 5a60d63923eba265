//! Core units, theme constants, error types, and the bullet-line model
//! shared by the PPTX writer and the deck builder.

pub mod bullets;
pub mod error;
pub mod theme;
pub mod units;

pub use bullets::{BulletLine, Emphasis, IndentLevel, LineIssue, ParagraphStyle, ParsedLines};
pub use error::{Error, Result};
pub use units::{Emu, Pt, Rect, Rgb};
