//! Image attribute normalization.
//!
//! Lazy-loading editors render a blurred thumbnail in `src` and keep the real
//! URL in `data-lazy-src`. Normalization rewrites the attributes in place so
//! the serialized markup and every later reader see resolved URLs. It must run
//! before the structural walk and the image harvest.

use log::debug;

use crate::canonical::{canonicalize, looks_low_resolution};
use crate::dom::{self, ImageSource, Selection};
use crate::patterns::{LAZY_LOW_RES_MARKERS, LAZY_SRC_ATTR, ORIGINAL_SRC_ATTR, SRC_LOW_RES_MARKERS};

/// Resolve lazy and blurred image attributes under `root`, in place.
///
/// For every `img` in document order:
///
/// - with a lazy source and a low-resolution `src`: the lazy source is
///   canonicalized and copied into `src`;
/// - with only a low-resolution `src`: `src` is canonicalized and the old
///   value is kept in `data-original-src` unless that is already set;
/// - otherwise the element is left alone.
///
/// Running it twice yields the same tree.
pub fn normalize(root: &Selection) {
    let mut rewritten = 0usize;

    for img in dom::query_all(root, "img") {
        let source = ImageSource::read(&img);

        match (source.lazy, source.displayed) {
            (Some(lazy), displayed) => {
                let low_res = displayed
                    .as_deref()
                    .is_some_and(|src| looks_low_resolution(src, LAZY_LOW_RES_MARKERS));
                if low_res {
                    let resolved = canonicalize(&lazy);
                    dom::set_attribute(&img, LAZY_SRC_ATTR, &resolved);
                    dom::set_attribute(&img, "src", &resolved);
                    rewritten += 1;
                }
            }
            (None, Some(src)) if looks_low_resolution(&src, SRC_LOW_RES_MARKERS) => {
                let resolved = canonicalize(&src);
                if !dom::has_attribute(&img, ORIGINAL_SRC_ATTR) {
                    dom::set_attribute(&img, ORIGINAL_SRC_ATTR, &src);
                }
                dom::set_attribute(&img, "src", &resolved);
                rewritten += 1;
            }
            _ => {}
        }
    }

    debug!("normalized {rewritten} image(s)");
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUR: &str = "https://postfiles.pstatic.net/a/p.jpg?type=w80_blur";
    const LAZY: &str = "https://postfiles.pstatic.net/a/p.jpg?type=w773";
    const LARGE: &str = "https://postfiles.pstatic.net/a/p.jpg?type=w966";

    fn attr(doc: &dom::Document, name: &str) -> Option<String> {
        dom::get_attribute(&doc.select("img"), name)
    }

    #[test]
    fn lazy_image_with_blurred_src_is_resolved() {
        let doc = dom::parse(&format!(r#"<div><img src="{BLUR}" data-lazy-src="{LAZY}"></div>"#));
        normalize(&doc.select("div"));
        assert_eq!(attr(&doc, "src").as_deref(), Some(LARGE));
        assert_eq!(attr(&doc, LAZY_SRC_ATTR).as_deref(), Some(LARGE));
    }

    #[test]
    fn lazy_image_with_good_src_is_untouched() {
        let good = "https://postfiles.pstatic.net/a/p.jpg?type=w1200";
        let doc = dom::parse(&format!(r#"<div><img src="{good}" data-lazy-src="{LAZY}"></div>"#));
        normalize(&doc.select("div"));
        assert_eq!(attr(&doc, "src").as_deref(), Some(good));
        assert_eq!(attr(&doc, LAZY_SRC_ATTR).as_deref(), Some(LAZY));
    }

    #[test]
    fn low_resolution_src_keeps_original() {
        let small = "https://postfiles.pstatic.net/a/p.jpg?type=s160";
        let doc = dom::parse(&format!(r#"<div><img src="{small}"></div>"#));
        normalize(&doc.select("div"));
        assert_eq!(attr(&doc, "src").as_deref(), Some(LARGE));
        assert_eq!(attr(&doc, ORIGINAL_SRC_ATTR).as_deref(), Some(small));
    }

    #[test]
    fn existing_original_is_not_clobbered() {
        let doc = dom::parse(&format!(
            r#"<div><img src="{BLUR}" data-original-src="first.jpg"></div>"#
        ));
        normalize(&doc.select("div"));
        assert_eq!(attr(&doc, ORIGINAL_SRC_ATTR).as_deref(), Some("first.jpg"));
    }

    #[test]
    fn plain_images_are_untouched() {
        let doc = dom::parse(r#"<div><img src="https://example.com/photo.jpg"></div>"#);
        let before = doc.html().to_string();
        normalize(&doc.select("div"));
        assert_eq!(doc.html().to_string(), before);
    }

    #[test]
    fn normalize_is_idempotent() {
        let html = format!(
            r#"<div>
                <img src="{BLUR}" data-lazy-src="{LAZY}">
                <img src="https://example.com/blur/x.jpg" data-lazy-src="https://example.com/blur/x.jpg?w80">
                <img src="https://postfiles.pstatic.net/b/q.jpg?type=s80">
                <img src="https://example.com/blur.png">
            </div>"#
        );
        let doc = dom::parse(&html);
        normalize(&doc.select("div"));
        let once = doc.html().to_string();
        normalize(&doc.select("div"));
        assert_eq!(doc.html().to_string(), once);
    }
}
