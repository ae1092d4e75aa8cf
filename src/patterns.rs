//! Compiled regex patterns and marker constants.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by their purpose in the extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Image Hosts
// =============================================================================

/// Path signature of the primary post-image host.
pub const PRIMARY_IMAGE_HOST: &str = "postfiles.pstatic.net";

/// Domain shared by the secondary thumbnail hosts (`blogpfthumb-phinf`, ...).
pub const SECONDARY_IMAGE_HOST: &str = "pstatic.net";

/// `type` values the primary host already serves at full resolution.
pub const HIGH_RES_TYPES: &[&str] = &["w966", "w2", "w1200", "w800"];

/// `type` value requested when upgrading a primary-host URL.
pub const LARGE_TYPE: &str = "w966";

/// Substring marking a blurred placeholder image.
pub const BLUR_MARKER: &str = "blur";

// =============================================================================
// Image Attributes
// =============================================================================

/// Attribute carrying the real URL of a lazily loaded image.
pub const LAZY_SRC_ATTR: &str = "data-lazy-src";

/// Attribute preserving a `src` value overwritten by normalization.
pub const ORIGINAL_SRC_ATTR: &str = "data-original-src";

/// Low-resolution markers checked on `src` when a lazy source exists.
pub const LAZY_LOW_RES_MARKERS: &[&str] = &["blur", "w80", "s80"];

/// Low-resolution markers checked on a lone `src`.
pub const SRC_LOW_RES_MARKERS: &[&str] = &["blur", "w80", "s80", "s160"];

// =============================================================================
// URL Patterns
// =============================================================================

/// Size codes at the end of a thumbnail filename stem (`photo_s100`, `photo_t`).
pub static SIZE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:_[stm]\d*)+$").expect("SIZE_SUFFIX regex"));

/// Blog id and post number in a post URL path.
pub static POST_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"blog\.naver\.com/([^/?#]+)/(\d+)").expect("POST_PATH regex")
});

// =============================================================================
// Script Fallback Patterns
// =============================================================================

/// Script bodies are scanned only when they mention this token.
pub const SCRIPT_IMAGE_TOKEN: &str = "se-module-image";

/// Original-resolution URL in the editor's embedded JSON.
pub static SCRIPT_ORIGINAL_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""originalUrl"\s*:\s*"(https://post[^"]+)""#).expect("SCRIPT_ORIGINAL_URL regex")
});

/// Plain URL field in the editor's embedded JSON.
pub static SCRIPT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""url"\s*:\s*"(https://post[^"]+)""#).expect("SCRIPT_URL regex")
});

// =============================================================================
// Placeholder Grammar
// =============================================================================

/// `{image_001.png}` tokens and `[image: image_001.png]` placeholder lines.
pub static IMAGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{image_(\d+)\.([A-Za-z0-9]+)\}|\[image: image_(\d+)\.([A-Za-z0-9]+)\]")
        .expect("IMAGE_TOKEN regex")
});

/// Zero-width space the editor leaves in empty paragraphs.
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_suffix_only_matches_stem_end() {
        assert!(SIZE_SUFFIX.is_match("photo_s100"));
        assert!(SIZE_SUFFIX.is_match("photo_t"));
        assert!(!SIZE_SUFFIX.is_match("my_summer"));
        assert!(!SIZE_SUFFIX.is_match("photo_l"));
    }

    #[test]
    fn post_path_captures_id_and_number() {
        let caps = POST_PATH.captures("https://blog.naver.com/hot9676/223749658381");
        let Some(caps) = caps else {
            panic!("expected POST_PATH to match");
        };
        assert_eq!(&caps[1], "hot9676");
        assert_eq!(&caps[2], "223749658381");
    }

    #[test]
    fn image_token_matches_both_forms() {
        let text = "{image_001.png}\n[image: image_002.jpg]";
        assert_eq!(IMAGE_TOKEN.find_iter(text).count(), 2);
    }
}
