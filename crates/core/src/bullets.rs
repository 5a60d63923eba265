//! Bullet-line model for slide bodies.
//!
//! Slide bodies are authored as plain strings whose prefix carries the
//! formatting:
//!
//! - `""` is a blank spacer line
//! - a leading `"  • "` marker or exactly three leading spaces nests the
//!   line one level, with the prefix stripped
//! - anything else is a top-level line, shown as a green bold header when
//!   it ends with `:`
//!
//! [`BulletLine::parse`] turns each string into an explicit
//! [`BulletLine`] once, so rendering never inspects prefixes again.
//! [`check_line`] reports lines whose leading whitespace matches none of
//! the recognised prefixes; those still parse as top-level lines.

use crate::theme;
use crate::units::{Pt, Rgb};

/// Marker for a nested bullet line.
pub const NESTED_MARKER: &str = "  • ";

/// Plain three-space indent for a nested line.
pub const NESTED_INDENT: &str = "   ";

/// Indentation level of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentLevel {
    /// Level 0.
    #[default]
    Top,
    /// Level 1.
    Nested,
}

impl IndentLevel {
    /// Numeric level as written to `a:pPr/@lvl`.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Nested => 1,
        }
    }
}

/// How a line is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Empty spacer line.
    Blank,
    /// Ordinary body text.
    Body,
    /// Section header within a body: bold, accent colored.
    Header,
}

/// One display line of a slide body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletLine {
    /// Display text with any indent prefix removed.
    pub text: String,
    pub level: IndentLevel,
    pub emphasis: Emphasis,
}

impl BulletLine {
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            level: IndentLevel::Top,
            emphasis: Emphasis::Blank,
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: IndentLevel::Top,
            emphasis: Emphasis::Body,
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: IndentLevel::Top,
            emphasis: Emphasis::Header,
        }
    }

    pub fn nested(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: IndentLevel::Nested,
            emphasis: Emphasis::Body,
        }
    }

    /// Parse one authored line.
    ///
    /// The marker is checked before the three-space indent, so `"  • x"`
    /// always loses four characters. A line with exactly two leading
    /// spaces and no marker stays a top-level line with its spaces kept.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            Self::blank()
        } else if let Some(rest) = raw.strip_prefix(NESTED_MARKER) {
            Self::nested(rest)
        } else if let Some(rest) = raw.strip_prefix(NESTED_INDENT) {
            Self::nested(rest)
        } else if raw.ends_with(':') {
            Self::header(raw)
        } else {
            Self::body(raw)
        }
    }

    /// Paragraph style for this line.
    pub fn style(&self) -> ParagraphStyle {
        match self.emphasis {
            Emphasis::Header => ParagraphStyle {
                size: theme::BODY_SIZE,
                color: theme::PRIMARY_GREEN,
                bold: true,
            },
            Emphasis::Blank | Emphasis::Body => ParagraphStyle {
                size: theme::BODY_SIZE,
                color: theme::DARK_GRAY,
                bold: false,
            },
        }
    }
}

/// Font attributes applied to a whole paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub size: Pt,
    pub color: Rgb,
    pub bold: bool,
}

/// A content line whose leading whitespace matches no recognised prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIssue {
    /// 0-based position of the line in its list.
    pub index: usize,
    /// Number of leading whitespace characters.
    pub leading: usize,
    /// The line as authored.
    pub line: String,
}

impl std::fmt::Display for LineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {} has {} leading space(s) but no recognised indent, kept at top level: {:?}",
            self.index + 1,
            self.leading,
            self.line
        )
    }
}

/// Check a single authored line, returning an issue when its indentation
/// is not one of the recognised prefixes.
pub fn check_line(index: usize, raw: &str) -> Option<LineIssue> {
    if raw.is_empty() || raw.starts_with(NESTED_MARKER) || raw.starts_with(NESTED_INDENT) {
        return None;
    }

    let leading = raw.chars().take_while(|c| c.is_whitespace()).count();
    if leading == 0 {
        return None;
    }

    Some(LineIssue {
        index,
        leading,
        line: raw.to_string(),
    })
}

/// Result of parsing a list of authored lines.
#[derive(Debug, Clone, Default)]
pub struct ParsedLines {
    /// One entry per input line, in input order.
    pub lines: Vec<BulletLine>,
    pub issues: Vec<LineIssue>,
}

/// Parse a list of authored lines, collecting indentation issues.
pub fn parse_lines(raw: &[&str]) -> ParsedLines {
    let mut parsed = ParsedLines {
        lines: Vec::with_capacity(raw.len()),
        issues: Vec::new(),
    };

    for (index, line) in raw.iter().enumerate() {
        if let Some(issue) = check_line(index, line) {
            parsed.issues.push(issue);
        }
        parsed.lines.push(BulletLine::parse(line));
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blank_line() {
        let line = BulletLine::parse("");
        assert_eq!(line, BulletLine::blank());
        assert_eq!(line.level, IndentLevel::Top);
        assert!(!line.style().bold);
    }

    #[test]
    fn test_marker_line_is_nested() {
        let line = BulletLine::parse("  • Example");
        assert_eq!(line.text, "Example");
        assert_eq!(line.level, IndentLevel::Nested);
        assert_eq!(line.emphasis, Emphasis::Body);
    }

    #[test]
    fn test_three_space_line_is_nested() {
        let line = BulletLine::parse("   Example");
        assert_eq!(line.text, "Example");
        assert_eq!(line.level, IndentLevel::Nested);
    }

    #[test]
    fn test_three_spaces_then_marker_keeps_glyph() {
        // "   • x" does not start with "  • ", so only three spaces go.
        let line = BulletLine::parse("   • Test individual methods");
        assert_eq!(line.text, "• Test individual methods");
        assert_eq!(line.level, IndentLevel::Nested);
    }

    #[test]
    fn test_nested_line_ending_in_colon_is_not_header() {
        let line = BulletLine::parse("  • Why:");
        assert_eq!(line.text, "Why:");
        assert_eq!(line.emphasis, Emphasis::Body);
        assert!(!line.style().bold);
    }

    #[test]
    fn test_header_line() {
        let line = BulletLine::parse("Section Header:");
        assert_eq!(line.text, "Section Header:");
        assert_eq!(line.level, IndentLevel::Top);
        assert_eq!(line.emphasis, Emphasis::Header);

        let style = line.style();
        assert!(style.bold);
        assert_eq!(style.color, theme::PRIMARY_GREEN);
        assert_eq!(style.size, theme::BODY_SIZE);
    }

    #[test]
    fn test_plain_line() {
        let line = BulletLine::parse("Plain line");
        assert_eq!(line.text, "Plain line");
        assert_eq!(line.level, IndentLevel::Top);

        let style = line.style();
        assert!(!style.bold);
        assert_eq!(style.color, theme::DARK_GRAY);
    }

    #[test]
    fn test_two_spaces_falls_through_to_top_level() {
        let line = BulletLine::parse("  mvn clean install");
        assert_eq!(line.text, "  mvn clean install");
        assert_eq!(line.level, IndentLevel::Top);
        assert_eq!(line.emphasis, Emphasis::Body);
    }

    #[test]
    fn test_check_line_flags_unrecognised_indent() {
        assert_eq!(check_line(0, ""), None);
        assert_eq!(check_line(0, "Header:"), None);
        assert_eq!(check_line(0, "  • Nested"), None);
        assert_eq!(check_line(0, "   Nested"), None);

        let issue = check_line(4, "  1. Requirements Analysis").unwrap();
        assert_eq!(issue.index, 4);
        assert_eq!(issue.leading, 2);

        assert!(check_line(0, " one space").is_some());
    }

    #[test]
    fn test_parse_lines_collects_issues_without_changing_lines() {
        let parsed = parse_lines(&["Maven Build:", "  mvn clean install", "  • Port: 8080"]);
        assert_eq!(parsed.lines.len(), 3);
        assert_eq!(parsed.lines[0], BulletLine::header("Maven Build:"));
        assert_eq!(parsed.lines[1], BulletLine::body("  mvn clean install"));
        assert_eq!(parsed.lines[2], BulletLine::nested("Port: 8080"));
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].index, 1);
    }

    #[test]
    fn test_issue_message_numbers_lines_from_one() {
        let issue = check_line(6, "  1. Requirements Analysis").unwrap();
        assert_eq!(issue.index, 6);
        let message = issue.to_string();
        assert!(message.starts_with("line 7 has 2 leading space(s)"), "{}", message);
        assert!(message.ends_with("\"  1. Requirements Analysis\""));
    }

    proptest! {
        #[test]
        fn prop_parse_lines_is_one_to_one(raw in proptest::collection::vec("[ •a-z:]{0,12}", 0..24)) {
            let refs: Vec<&str> = raw.iter().map(String::as_str).collect();
            let parsed = parse_lines(&refs);
            prop_assert_eq!(parsed.lines.len(), raw.len());
            for (line, source) in parsed.lines.iter().zip(&raw) {
                prop_assert_eq!(line, &BulletLine::parse(source));
                prop_assert!(source.ends_with(line.text.as_str()));
            }
        }
    }
}
