//! Writing a [`Presentation`] as a PPTX (OPC zip) package.

use crate::document::Presentation;
use crate::parts;
use crate::slide_xml::slide_xml;
use deck_core::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

impl Presentation {
    /// Write the presentation to a file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        log::debug!("Saved {} slides to {}", self.slide_count(), path.display());
        Ok(())
    }

    /// Write the presentation to any seekable destination.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut package = PackageWriter::new(writer);
        let count = self.slide_count();

        package.add(parts::CONTENT_TYPES_PATH, &parts::content_types_xml(count)?)?;
        package.add(parts::PACKAGE_RELS_PATH, &parts::package_rels_xml()?)?;
        package.add(parts::CORE_PROPS_PATH, &parts::core_props_xml(&self.properties)?)?;
        package.add(parts::APP_PROPS_PATH, &parts::app_props_xml(count)?)?;
        package.add(parts::PRESENTATION_PATH, &parts::presentation_xml(self)?)?;
        package.add(parts::PRESENTATION_RELS_PATH, &parts::presentation_rels_xml(count)?)?;
        package.add(parts::PRES_PROPS_PATH, &parts::pres_props_xml()?)?;
        package.add(parts::TABLE_STYLES_PATH, &parts::table_styles_xml()?)?;
        package.add(parts::SLIDE_MASTER_PATH, &parts::slide_master_xml()?)?;
        package.add(parts::SLIDE_MASTER_RELS_PATH, &parts::slide_master_rels_xml()?)?;
        package.add(parts::SLIDE_LAYOUT_PATH, &parts::slide_layout_xml()?)?;
        package.add(parts::SLIDE_LAYOUT_RELS_PATH, &parts::slide_layout_rels_xml()?)?;
        package.add(parts::THEME_PATH, &parts::theme_xml()?)?;

        let slide_rels = parts::slide_rels_xml()?;
        for (index, slide) in self.slides.iter().enumerate() {
            let number = index + 1;
            package.add(&parts::slide_path(number), &slide_xml(slide)?)?;
            package.add(&parts::slide_rels_path(number), &slide_rels)?;
        }

        package.finish()
    }
}

/// Zip writer that deflates every part.
struct PackageWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: FileOptions,
}

impl<W: Write + Seek> PackageWriter<W> {
    fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    fn add(&mut self, path: &str, content: &str) -> Result<()> {
        log::trace!("Writing part {} ({} bytes)", path, content.len());
        self.zip
            .start_file(path, self.options)
            .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", path, e)))?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        let mut inner = self
            .zip
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))?;
        inner.flush()?;
        Ok(())
    }
}
