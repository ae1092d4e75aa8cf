//! Image URL canonicalization.
//!
//! Maps a raw image reference to the highest resolution the image hosts are
//! known to serve. The rules are host heuristics: a rewritten URL may still
//! fail to download, and recovering from that belongs to the fetch layer.
//!
//! The function is total. A URL no rule recognizes comes back unchanged.

use crate::patterns::{
    HIGH_RES_TYPES, LARGE_TYPE, PRIMARY_IMAGE_HOST, SECONDARY_IMAGE_HOST, SIZE_SUFFIX,
};

/// Rewrite an image URL to its best-known high-resolution form.
///
/// Rules, first match wins:
///
/// 1. Primary post-image host: keep a high-resolution `type` parameter,
///    upgrade a low one to the large type, append one when missing, and drop
///    an empty query entirely.
/// 2. Secondary thumbnail hosts: strip a size suffix (`_s100`, `_t`, `_m`)
///    from the filename stem and drop the query.
/// 3. Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use se_extract::canonical::canonicalize;
///
/// assert_eq!(
///     canonicalize("https://postfiles.pstatic.net/a/b.jpg?type=w80_blur"),
///     "https://postfiles.pstatic.net/a/b.jpg?type=w966"
/// );
/// assert_eq!(canonicalize("https://example.com/x.png"), "https://example.com/x.png");
/// ```
#[must_use]
pub fn canonicalize(url: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };

    if base.contains(PRIMARY_IMAGE_HOST) {
        return canonicalize_primary(url, base, query);
    }

    if base.contains(SECONDARY_IMAGE_HOST) {
        if let Some(stripped) = strip_size_suffix(base) {
            return stripped;
        }
    }

    url.to_string()
}

/// True when `url` points at the primary post-image host.
#[must_use]
pub fn is_primary_host(url: &str) -> bool {
    url.contains(PRIMARY_IMAGE_HOST)
}

/// True when `url` contains any of the given low-resolution markers.
#[must_use]
pub fn looks_low_resolution(url: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| url.contains(marker))
}

fn canonicalize_primary(url: &str, base: &str, query: Option<&str>) -> String {
    // The bare path serves the origin-quality asset.
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return base.to_string();
    };

    let params: Vec<&str> = query.split('&').collect();
    let types: Vec<&str> = params.iter().filter_map(|p| p.strip_prefix("type=")).collect();

    if types.is_empty() {
        return format!("{base}?{query}&type={LARGE_TYPE}");
    }

    if types.iter().any(|t| HIGH_RES_TYPES.contains(t)) {
        return url.to_string();
    }

    let rewritten: Vec<String> = params
        .iter()
        .map(|p| {
            if p.starts_with("type=") {
                format!("type={LARGE_TYPE}")
            } else {
                (*p).to_string()
            }
        })
        .collect();

    format!("{base}?{}", rewritten.join("&"))
}

/// Remove a trailing size code from the filename stem, keeping the extension.
///
/// Returns `None` when the filename carries no size code.
fn strip_size_suffix(base: &str) -> Option<String> {
    let (dir, filename) = base.rsplit_once('/')?;
    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (filename, None),
    };

    let suffix = SIZE_SUFFIX.find(stem)?;
    let stem = &stem[..suffix.start()];
    if stem.is_empty() {
        return None;
    }

    Some(match ext {
        Some(ext) => format!("{dir}/{stem}.{ext}"),
        None => format!("{dir}/{stem}"),
    })
}
