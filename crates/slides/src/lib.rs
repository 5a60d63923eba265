//! Slide helpers and the deck builder for the MyWelly presentation.
//!
//! Every content slide is a [`frame`] plus either a bullet body or a code
//! block; the opening and closing slides are [`hero`] slides.

pub mod background;
pub mod bullets;
pub mod code;
pub mod content;
pub mod deck;
pub mod frame;
pub mod hero;

pub use background::{paint_background, Backdrop};
pub use bullets::{render_bullets, style_paragraphs, StyledParagraph};
pub use code::code_slide;
pub use deck::{BuiltDeck, ContentIssue, DeckBuilder, OUTPUT_PATH};
pub use frame::frame_slide;
pub use hero::{hero_slide, HeroLayout, HeroText};
