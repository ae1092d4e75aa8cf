//! Error types for se-extract.
//!
//! This module defines the error types returned by extraction operations.
//! Canonicalization never produces an error: an unrecognized URL is returned
//! unchanged.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed or the input was unusable.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Character encoding detection or conversion failed.
    #[error("Encoding detection failed: {0}")]
    EncodingError(String),

    /// No content container was found in the document.
    ///
    /// When the document embeds the post through a frame, `frame_url` holds the
    /// resolved address of that frame. The caller may fetch it and retry with
    /// [`crate::extract_with_frame`].
    #[error("No content container found{}", frame_hint(.frame_url.as_deref()))]
    NoContainer {
        /// Absolute URL of the embedded post frame, if one was referenced.
        frame_url: Option<String>,
    },

    /// General extraction failure.
    #[error("Extraction failed: {0}")]
    ExtractionError(String),
}

fn frame_hint(frame_url: Option<&str>) -> String {
    frame_url.map_or_else(String::new, |url| format!(" (post frame at {url})"))
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
