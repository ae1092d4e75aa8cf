//! Result types for extraction output.
//!
//! This module defines the ordered content structure, the canonical image
//! list, and the per-document extraction result.

use serde::{Deserialize, Serialize};

/// One block of a post, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// A contiguous block of visible text.
    Text {
        /// Trimmed text; never empty.
        body: String,
    },

    /// A single image reference as it appeared in the markup.
    Image {
        /// Lazy source if present, else displayed source. Not canonicalized.
        url: String,
        /// `alt` attribute, empty when absent.
        alt: String,
        /// Declared width (`data-width`), empty when absent.
        width: String,
        /// Declared height (`data-height`), empty when absent.
        height: String,
    },
}

impl ContentItem {
    /// True for `Text` items.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// True for `Image` items.
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Ordered sequence of content items.
///
/// An empty structure means no structural information was found; the
/// reassembler then spreads images evenly over the paragraphs.
pub type ContentStructure = Vec<ContentItem>;

/// Ordered list of distinct canonical image URLs.
///
/// Order is first-seen order; pushing a URL already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalImageList {
    urls: Vec<String>,
}

impl CanonicalImageList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `url` unless already present. Returns whether it was added.
    pub fn push(&mut self, url: String) -> bool {
        if self.urls.contains(&url) {
            return false;
        }
        self.urls.push(url);
        true
    }

    /// URL at a 0-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    /// Number of URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True when no URL was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Iterate URLs in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// The URLs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }
}

impl FromIterator<String> for CanonicalImageList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = Self::new();
        for url in iter {
            list.push(url);
        }
        list
    }
}

impl From<CanonicalImageList> for Vec<String> {
    fn from(list: CanonicalImageList) -> Self {
        list.urls
    }
}

/// Identity of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostId {
    /// Blog owner id.
    pub blog_id: String,
    /// Post number.
    pub log_no: String,
}

/// Result of extracting one post.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractResult {
    /// Blog id and post number, when the source URL carried them.
    pub post: Option<PostId>,

    /// Post title.
    pub title: Option<String>,

    /// Serialized content container, after image attribute normalization.
    pub content_html: String,

    /// Paragraph text, blocks separated by blank lines.
    pub content_text: String,

    /// Text and image blocks in document order.
    pub structure: ContentStructure,

    /// Canonical image URLs in document order.
    pub images: CanonicalImageList,

    /// Paragraphs interleaved with image placeholder blocks.
    pub normalized: String,

    /// Text and image markup only, with `{image_NNN.ext}` tokens.
    pub simplified_html: String,

    /// Non-fatal issues encountered during extraction.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_first_occurrence() {
        let mut list = CanonicalImageList::new();
        assert!(list.push("a".to_string()));
        assert!(list.push("b".to_string()));
        assert!(!list.push("a".to_string()));
        assert_eq!(list.as_slice(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn collect_deduplicates_in_order() {
        let list: CanonicalImageList = ["x", "y", "x", "z", "y"].into_iter().map(String::from).collect();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(list.get(2), Some("z"));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn content_item_serializes_with_type_tag() {
        let item = ContentItem::Text { body: "hello".to_string() };
        match serde_json::to_string(&item) {
            Ok(json) => assert_eq!(json, r#"{"type":"text","body":"hello"}"#),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn image_list_serializes_as_array() {
        let list: CanonicalImageList = ["a".to_string()].into_iter().collect();
        match serde_json::to_string(&list) {
            Ok(json) => assert_eq!(json, r#"["a"]"#),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }
}
