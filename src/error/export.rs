//! Errors from capturing and saving the share card.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// No configured font and none of the known system fonts exist.
    #[error("no usable font found (set JOKECARD_FONT)")]
    NoFont,

    /// A font file was found but could not be read or parsed.
    #[error("failed to load font {path}: {message}")]
    FontLoad { path: PathBuf, message: String },

    /// The font lacks glyphs for characters on the card.
    #[error("font has no glyphs for {missing:?}")]
    MissingGlyphs { missing: String },

    /// The card has no area to capture.
    #[error("share card has zero size")]
    EmptyCapture,

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ExportError::NoFont => "EXPORT_NO_FONT",
            ExportError::FontLoad { .. } => "EXPORT_FONT_LOAD",
            ExportError::MissingGlyphs { .. } => "EXPORT_MISSING_GLYPHS",
            ExportError::EmptyCapture => "EXPORT_EMPTY",
            ExportError::Encode(_) => "EXPORT_ENCODE",
            ExportError::Io { .. } => "EXPORT_IO",
        }
    }
}
