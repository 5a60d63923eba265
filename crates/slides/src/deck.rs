//! Deck assembly: opening slide, content slides in order, closing slide.

use crate::bullets::render_bullets;
use crate::code::code_slide;
use crate::content::{Body, ContentSlide, CLOSING, CONTENT_SLIDES, OPENING};
use crate::frame::frame_slide;
use crate::hero::hero_slide;
use deck_core::bullets::parse_lines;
use deck_core::{BulletLine, LineIssue};
use deck_pptx::{DocumentProperties, Presentation};

/// Where the finished deck is written, relative to the working directory.
pub const OUTPUT_PATH: &str = "MyWelly_Presentation.pptx";

/// Body of a planned slide, with bullet lines already parsed.
#[derive(Debug, Clone)]
pub enum SlideContent {
    Bullets(Vec<BulletLine>),
    Code(&'static str),
}

/// A content slide ready to render.
#[derive(Debug, Clone)]
pub struct PlannedSlide {
    pub section: &'static str,
    pub title: &'static str,
    pub content: SlideContent,
}

/// A content line flagged while planning, with the slide it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    /// 1-based slide number in the finished deck.
    pub slide: usize,
    pub title: &'static str,
    pub issue: LineIssue,
}

impl std::fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slide {} ({}): {}", self.slide, self.title, self.issue)
    }
}

/// The finished presentation and anything flagged while building it.
#[derive(Debug)]
pub struct BuiltDeck {
    pub presentation: Presentation,
    pub issues: Vec<ContentIssue>,
}

/// Builds the deck from content tables.
#[derive(Debug)]
pub struct DeckBuilder {
    slides: Vec<PlannedSlide>,
    issues: Vec<ContentIssue>,
}

impl DeckBuilder {
    /// Plan the built-in deck.
    pub fn new() -> Self {
        Self::from_slides(CONTENT_SLIDES)
    }

    /// Plan a deck from arbitrary content slides, parsing every bullet
    /// list once.
    pub fn from_slides(entries: &[ContentSlide]) -> Self {
        let mut slides = Vec::with_capacity(entries.len());
        let mut issues = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            // Slide 1 is the opening hero slide.
            let number = index + 2;
            let content = match entry.body {
                Body::Bullets(raw) => {
                    let parsed = parse_lines(raw);
                    for issue in parsed.issues {
                        let issue = ContentIssue {
                            slide: number,
                            title: entry.title,
                            issue,
                        };
                        log::warn!("{}", issue);
                        issues.push(issue);
                    }
                    SlideContent::Bullets(parsed.lines)
                }
                Body::Code(code) => SlideContent::Code(code),
            };
            slides.push(PlannedSlide {
                section: entry.section,
                title: entry.title,
                content,
            });
        }

        Self { slides, issues }
    }

    pub fn planned(&self) -> &[PlannedSlide] {
        &self.slides
    }

    /// Total slides the built deck will hold, hero slides included.
    pub fn slide_count(&self) -> usize {
        self.slides.len() + 2
    }

    /// Build the presentation.
    pub fn build(&self) -> BuiltDeck {
        let mut presentation = Presentation::new();
        presentation.properties = DocumentProperties {
            title: OPENING.title.to_string(),
            subject: OPENING.subtitle.to_string(),
            author: String::new(),
        };

        hero_slide(&mut presentation, &OPENING);

        for planned in &self.slides {
            match &planned.content {
                SlideContent::Bullets(lines) => {
                    let slide = frame_slide(&mut presentation, planned.section, planned.title);
                    render_bullets(slide, lines);
                }
                SlideContent::Code(code) => {
                    code_slide(&mut presentation, planned.section, planned.title, code);
                }
            }
        }

        hero_slide(&mut presentation, &CLOSING);

        log::debug!("Built {} slides", presentation.slide_count());
        BuiltDeck {
            presentation,
            issues: self.issues.clone(),
        }
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck_has_41_slides() {
        let builder = DeckBuilder::new();
        assert_eq!(builder.slide_count(), 41);

        let deck = builder.build();
        assert_eq!(deck.presentation.slide_count(), 41);
    }

    #[test]
    fn test_bullets_are_parsed_at_planning() {
        let builder = DeckBuilder::new();
        match &builder.planned()[0].content {
            SlideContent::Bullets(lines) => {
                assert_eq!(lines.len(), 5);
                assert_eq!(lines[0], BulletLine::body("Difficult to find and book healthcare providers"));
            }
            SlideContent::Code(_) => panic!("first content slide is a bullet list"),
        }
    }

    #[test]
    fn test_unrecognised_indents_are_flagged_with_slide_number() {
        let entries = [
            ContentSlide {
                section: "Phase 5",
                title: "Deployment",
                body: Body::Bullets(&["Maven Build:", "  mvn clean install", "  • Port: 8080"]),
            },
            ContentSlide {
                section: "Implementation",
                title: "Code",
                body: Body::Code("fn main() {}"),
            },
        ];
        let builder = DeckBuilder::from_slides(&entries);
        assert_eq!(builder.slide_count(), 4);

        let deck = builder.build();
        assert_eq!(deck.issues.len(), 1);
        assert_eq!(deck.issues[0].slide, 2);
        assert_eq!(deck.issues[0].title, "Deployment");
        assert_eq!(deck.issues[0].issue.index, 1);
        assert_eq!(deck.presentation.slide_count(), 4);
    }

    #[test]
    fn test_builtin_deck_flags_two_space_lines() {
        let builder = DeckBuilder::new();
        let deck = builder.build();
        // "Waterfall Model - SDLC" numbers its phases with two spaces.
        assert!(deck
            .issues
            .iter()
            .any(|i| i.slide == 4 && i.issue.line == "  1. Requirements Analysis"));
        assert!(deck.issues.iter().any(|i| i.title == "Deployment"));
        assert!(deck.issues.iter().all(|i| i.issue.leading == 2));
    }

    #[test]
    fn test_each_flagged_line_is_reported_once() {
        let deck = DeckBuilder::new().build();
        assert_eq!(deck.issues.len(), 19);

        let mut seen: Vec<(usize, usize)> = deck
            .issues
            .iter()
            .map(|i| (i.slide, i.issue.index))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), deck.issues.len());

        let first = deck.issues.iter().find(|i| i.slide == 4).unwrap();
        assert_eq!(
            first.to_string(),
            "slide 4 (Waterfall Model - SDLC): line 7 has 2 leading space(s) but no recognised indent, kept at top level: \"  1. Requirements Analysis\""
        );
    }

    #[test]
    fn test_document_properties() {
        let deck = DeckBuilder::new().build();
        assert_eq!(deck.presentation.properties.title, "MyWelly");
    }
}
