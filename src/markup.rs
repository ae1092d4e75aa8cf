//! Simplified text-and-image markup.
//!
//! Rebuilds a post as bare `<p>` and `<img>` elements in document order. Each
//! image is followed by an `{image_NNN.ext}` token naming the file it will be
//! saved under, which republishing tools use to re-embed the image.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::dom::{self, Selection};
use crate::options::Options;
use crate::reassemble::image_filename;

/// Class of editor text modules.
const TEXT_MODULE: &str = ".se-module-text";

/// Build the simplified markup for a normalized container.
///
/// Text modules contribute one `<p>` per non-blank paragraph. Image elements
/// contribute their first `img`, deduplicated by `src` and numbered in
/// order of first appearance.
#[must_use]
pub fn simplified_html(root: &Selection, options: &Options) -> String {
    let mut out = String::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut counter = 0usize;

    for block in dom::query_all(root, &options.markers.simplified) {
        if block.is(TEXT_MODULE) {
            for line in dom::paragraph_lines(&block) {
                let _ = writeln!(out, "<p>{}</p>", escape_html(&line));
            }
            continue;
        }

        let Some(img) = dom::first_image(&block) else {
            continue;
        };
        let Some(src) = dom::get_attribute(&img, "src") else {
            continue;
        };
        if !seen.insert(src.clone()) {
            continue;
        }

        counter += 1;
        let alt = dom::attribute_or_empty(&img, "alt");
        let _ = writeln!(
            out,
            "<img src=\"{}\" alt=\"{}\">\n{{{}}}",
            escape_html(&src),
            escape_html(&alt),
            image_filename(counter, &options.image_extension)
        );
    }

    out
}

/// Escape text for use in element content and quoted attributes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
