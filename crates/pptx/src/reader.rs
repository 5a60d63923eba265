//! Reading a PPTX back into a per-slide text outline.
//!
//! Used to check a written deck: slide order comes from the presentation
//! relationships, and each shape's paragraphs are collected in document
//! order with whitespace kept as authored.

use deck_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Text found on one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutline {
    /// 1-based slide number.
    pub number: usize,
    /// One entry per shape with a text body; paragraphs joined by `\n`.
    pub texts: Vec<String>,
}

impl SlideOutline {
    /// Whether any shape on the slide contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.contains(needle))
    }
}

/// Reader for PPTX packages.
pub struct PptxReader;

impl PptxReader {
    pub fn new() -> Self {
        Self
    }

    /// Open a file and read its outline.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Vec<SlideOutline>> {
        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file))
    }

    /// Read the outline of every slide, in presentation order.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<Vec<SlideOutline>> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let slide_order = self.get_slide_order(&mut archive)?;
        log::debug!("Package lists {} slides", slide_order.len());

        slide_order
            .iter()
            .enumerate()
            .map(|(idx, path)| {
                let content = self.read_file_from_archive(&mut archive, path)?;
                Ok(SlideOutline {
                    number: idx + 1,
                    texts: extract_shape_texts(&content)?,
                })
            })
            .collect()
    }

    /// Ordered slide paths from `ppt/_rels/presentation.xml.rels`.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_path = "ppt/_rels/presentation.xml.rels";
        let rels_content = self
            .read_file_from_archive(archive, rels_path)
            .map_err(|_| Error::MissingPart(rels_path.to_string()))?;

        let mut slides: Vec<(String, Option<usize>)> = Vec::new();
        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut rel_type = String::new();
                    let mut target = String::new();
                    let mut id = String::new();

                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value).to_string();
                        match attr.key.as_ref() {
                            b"Type" => rel_type = value,
                            b"Target" => target = value,
                            b"Id" => id = value,
                            _ => {}
                        }
                    }

                    if is_slide_relationship(&rel_type) {
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, extract_trailing_number(&id)));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_slide_relationship(rel_type: &str) -> bool {
    rel_type.ends_with("/slide")
}

/// Collect the text of each shape on a slide.
fn extract_shape_texts(xml_content: &str) -> Result<Vec<String>> {
    let mut texts = Vec::new();
    let mut reader = Reader::from_str(xml_content);

    let mut paragraphs: Option<Vec<String>> = None;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"txBody" => paragraphs = Some(Vec::new()),
                b"p" => {
                    if let Some(paras) = paragraphs.as_mut() {
                        paras.push(String::new());
                    }
                }
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if local_name(e.name().as_ref()) == b"p" {
                    if let Some(paras) = paragraphs.as_mut() {
                        paras.push(String::new());
                    }
                }
            }
            Ok(Event::Text(ref e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::XmlError(format!("Bad text in slide: {}", e)))?;
                if let Some(current) = paragraphs.as_mut().and_then(|p| p.last_mut()) {
                    current.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"t" => in_text = false,
                b"txBody" => {
                    if let Some(paras) = paragraphs.take() {
                        texts.push(paras.join("\n"));
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    Ok(texts)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().position(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// Trailing number of an id like "rId12".
fn extract_trailing_number(s: &str) -> Option<usize> {
    let start = s.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    s[start..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Layout, Presentation};
    use deck_core::Rect;
    use std::io::Cursor;

    #[test]
    fn test_extract_trailing_number() {
        assert_eq!(extract_trailing_number("rId1"), Some(1));
        assert_eq!(extract_trailing_number("rId12"), Some(12));
        assert_eq!(extract_trailing_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_slide_relationship_filter() {
        let base = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/";
        assert!(is_slide_relationship(&format!("{}slide", base)));
        assert!(!is_slide_relationship(&format!("{}slideMaster", base)));
        assert!(!is_slide_relationship(&format!("{}slideLayout", base)));
        assert!(!is_slide_relationship(&format!("{}theme", base)));
    }

    #[test]
    fn test_round_trip_preserves_order_and_whitespace() {
        let mut pres = Presentation::new();
        for n in 1..=12 {
            let slide = pres.add_slide(Layout::Blank);
            let frame = slide.add_text_box(Rect::default()).text_frame_mut();
            frame.set_text(&format!("Slide {}\n\n    indented", n));
        }

        let mut cursor = Cursor::new(Vec::new());
        pres.write_to(&mut cursor).unwrap();
        cursor.set_position(0);

        let outline = PptxReader::new().read(cursor).unwrap();
        assert_eq!(outline.len(), 12);
        assert_eq!(outline[0].texts, vec!["Slide 1\n\n    indented"]);
        assert_eq!(outline[11].number, 12);
        assert!(outline[11].contains("Slide 12"));
    }

    #[test]
    fn test_rejects_non_zip() {
        let err = PptxReader::new().read(Cursor::new(b"not a zip".to_vec())).unwrap_err();
        assert!(matches!(err, Error::ZipError(_)));
    }
}
