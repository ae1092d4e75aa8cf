//! Configuration options for content extraction.
//!
//! The `Options` struct controls where placeholders point, how the post is
//! identified, and which CSS markers identify editor modules.

use std::path::PathBuf;

use serde::Deserialize;

/// CSS selectors identifying the editor's structural markers.
///
/// Defaults follow the SmartEditor ONE markup used by Naver blog posts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Element holding the whole post body.
    ///
    /// Default: `.se-main-container`
    pub container: String,

    /// Frame embedding the post when the outer page has no container.
    ///
    /// Default: `iframe#mainFrame`
    pub frame: String,

    /// Post title element.
    ///
    /// Default: `.se-title-text`
    pub title: String,

    /// One semantic unit (a paragraph or an image insertion).
    ///
    /// Default: `.se-module`
    pub module: String,

    /// Marker inside a module identifying text content.
    ///
    /// Default: `.se-text`
    pub text: String,

    /// Marker identifying an image or image-strip insertion.
    ///
    /// Default: `.se-image, .se-imageStrip`
    pub image: String,

    /// Elements walked when building the simplified markup.
    ///
    /// Default: `.se-module-text, .se-module-image, .se-image, .se-imageStrip`
    pub simplified: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            container: ".se-main-container".to_string(),
            frame: "iframe#mainFrame".to_string(),
            title: ".se-title-text".to_string(),
            module: ".se-module".to_string(),
            text: ".se-text".to_string(),
            image: ".se-image, .se-imageStrip".to_string(),
            simplified: ".se-module-text, .se-module-image, .se-image, .se-imageStrip".to_string(),
        }
    }
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use se_extract::Options;
///
/// let options = Options {
///     url: Some("https://blog.naver.com/hot9676/223749658381".to_string()),
///     image_dir: "out/hot9676_223749658381".into(),
///     ..Options::default()
/// };
/// assert_eq!(options.image_extension, "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Source URL of the post.
    ///
    /// Used to derive the blog id and post number.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Base location joined with each placeholder filename in the
    /// `[path: ...]` line of the normalized output.
    ///
    /// Default: `.`
    pub image_dir: PathBuf,

    /// Extension of the synthetic image filenames.
    ///
    /// Default: `png`
    pub image_extension: String,

    /// Base URL used to resolve a relative frame `src`.
    ///
    /// Default: `https://blog.naver.com`
    pub frame_base_url: String,

    /// Scan inline scripts for image URLs when no tier finds any.
    ///
    /// Default: `true`
    pub script_fallback: bool,

    /// Structural CSS markers.
    pub markers: Markers,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            image_dir: PathBuf::from("."),
            image_extension: "png".to_string(),
            frame_base_url: "https://blog.naver.com".to_string(),
            script_fallback: true,
            markers: Markers::default(),
        }
    }
}

impl Options {
    /// Parse options from a JSON document; absent fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::ParseError(format!("options: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_editor_markup() {
        let options = Options::default();
        assert_eq!(options.markers.container, ".se-main-container");
        assert_eq!(options.markers.module, ".se-module");
        assert_eq!(options.image_extension, "png");
        assert!(options.script_fallback);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{"image_extension": "jpg", "markers": {"text": ".se-module-text"}}"#;
        match Options::from_json(json) {
            Ok(options) => {
                assert_eq!(options.image_extension, "jpg");
                assert_eq!(options.markers.text, ".se-module-text");
                assert_eq!(options.markers.module, ".se-module");
                assert_eq!(options.frame_base_url, "https://blog.naver.com");
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(Options::from_json("{"), Err(crate::Error::ParseError(_))));
    }
}
