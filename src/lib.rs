//! # se-extract
//!
//! Ordered content extraction for SmartEditor blog posts.
//!
//! Given the markup of a post, this library recovers the order in which the
//! author interleaved text and images, resolves every image reference to its
//! highest known resolution, and produces a normalized text where images are
//! replaced by numbered placeholder blocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use se_extract::extract;
//!
//! let html = r#"<div class="se-main-container">
//!   <div class="se-module"><p class="se-text">Hello</p></div>
//!   <div class="se-module"><div class="se-image">
//!     <img src="https://postfiles.pstatic.net/a/b.jpg?type=w80_blur"
//!          data-lazy-src="https://postfiles.pstatic.net/a/b.jpg?type=w773">
//!   </div></div>
//! </div>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.images.len(), 1);
//! assert!(result.normalized.starts_with("Hello\n\n[image: image_001.png]"));
//! # Ok::<(), se_extract::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Normalize** image attributes in place (lazy and blurred sources).
//! 2. **Walk** content modules into an ordered [`ContentStructure`].
//! 3. **Harvest** canonical image URLs with tiered fallbacks.
//! 4. **Reassemble** paragraphs and placeholders into normalized text.
//!
//! Fetching pages and frames, downloading images, and persisting results are
//! left to the caller.

mod batch;
mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Image URL canonicalization.
pub mod canonical;

/// In-place image attribute normalization.
pub mod normalize;

/// Structural walk over content modules.
pub mod structure;

/// Tiered, order-preserving image harvesting.
pub mod harvest;

/// Paragraph and placeholder reassembly.
pub mod reassemble;

/// Simplified text-and-image markup with image tokens.
pub mod markup;

/// Post identity and frame URL helpers.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use batch::{extract_batch, BatchInput, BatchOutcome};
pub use error::{Error, Result};
pub use options::{Markers, Options};
pub use result::{CanonicalImageList, ContentItem, ContentStructure, ExtractResult, PostId};

/// Extracts a post from its markup using default options.
///
/// Returns [`Error::NoContainer`] when the markup holds no post container;
/// its `frame_url` names the embedded frame to fetch, if any.
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts a post from its markup with custom options.
///
/// # Example
///
/// ```rust
/// use se_extract::{extract_with_options, Options};
///
/// let options = Options {
///     url: Some("https://blog.naver.com/hot9676/223749658381".to_string()),
///     ..Options::default()
/// };
/// let html = r#"<div class="se-main-container"><p>text</p></div>"#;
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.post.map(|p| p.blog_id).as_deref(), Some("hot9676"));
/// # Ok::<(), se_extract::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_document(html, None, options)
}

/// Extracts a post whose page embeds the content through a frame.
///
/// The container is looked up in `page` first and then in `frame`. The title
/// is taken from the page when it has one, else from the frame.
pub fn extract_with_frame(page: &str, frame: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_document(page, Some(frame), options)
}

/// Resolved URL of the frame embedding the post, if `html` references one.
#[must_use]
pub fn frame_url(html: &str, options: &Options) -> Option<String> {
    extract::frame_url(html, options)
}

/// Extracts a post from raw bytes, detecting the declared charset first.
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts a post from raw bytes with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
