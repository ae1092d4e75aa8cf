//! Character encoding detection and transcoding.
//!
//! Older blog skins are served as EUC-KR (or its superset MS949) and declare
//! it in a meta tag. Raw bytes are decoded to UTF-8 before parsing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use log::warn;
use regex::Regex;

use crate::error::{Error, Result};

/// Only the head of the document is searched for a declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("CHARSET_RE regex")
});

/// Detect the declared character encoding of HTML bytes.
///
/// Defaults to UTF-8 when no known label is declared.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use se_extract::encoding::transcode_to_utf8;
///
/// let html = b"<html><meta charset=\"euc-kr\"><body>\xc7\xd1\xb1\xdb</body></html>";
/// assert!(transcode_to_utf8(html).contains("한글"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode(html, detect_encoding(html))
}

/// Decode HTML bytes with an explicitly named encoding, ignoring any
/// declaration in the document.
///
/// Returns [`Error::EncodingError`] when `label` names no known encoding.
pub fn transcode_with_label(html: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::EncodingError(format!("unknown encoding label `{label}`")))?;
    Ok(decode(html, encoding))
}

fn decode(html: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        warn!("invalid {} sequences replaced while decoding", used.name());
    }
    decoded.into_owned()
}
