//! Error types for building and writing presentation decks.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing or reading a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create, write, or read a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error while packaging or opening a PPTX.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML serialization or parsing error.
    #[error("XML error: {0}")]
    XmlError(String),

    /// A part required by the package is missing.
    #[error("Missing package part: {0}")]
    MissingPart(String),
}
