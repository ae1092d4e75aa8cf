//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the normalizer, walker,
//! and harvester. Selections are iterated in document order.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns::{LAZY_SRC_ATTR, ZERO_WIDTH_SPACE};

// === Attribute Operations ===

/// Get a non-empty, trimmed attribute value.
///
/// An attribute that is present but blank reads as absent.
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Get an attribute value, defaulting to the empty string.
#[must_use]
pub fn attribute_or_empty(sel: &Selection, name: &str) -> String {
    get_attribute(sel, name).unwrap_or_default()
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Querying ===

/// Split a selection into single-node selections, in document order.
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// All descendants of `sel` matching `selector`, in document order.
#[must_use]
pub fn query_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    elements(&sel.select(selector))
}

/// First descendant of `sel` matching `selector`.
#[must_use]
pub fn query_first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// True when some descendant of `sel` matches `selector`.
#[inline]
#[must_use]
pub fn contains(sel: &Selection, selector: &str) -> bool {
    sel.select(selector).length() > 0
}

// === Text Content ===

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Whitespace-collapsed text of one line, with zero-width spaces removed.
#[must_use]
pub fn clean_line(text: &str) -> String {
    text.replace(ZERO_WIDTH_SPACE, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Visible text of each paragraph element under `sel`, blanks dropped.
///
/// Falls back to the lines of the element's whole text when it has no
/// paragraph elements.
#[must_use]
pub fn paragraph_lines(sel: &Selection) -> Vec<String> {
    let paragraphs = sel.select("p");
    let lines: Vec<String> = if paragraphs.length() > 0 {
        elements(&paragraphs)
            .iter()
            .map(|p| clean_line(&p.text()))
            .collect()
    } else {
        sel.text().lines().map(clean_line).collect()
    };

    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

/// Visible text of `sel`: its paragraph lines joined by newlines.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    paragraph_lines(sel).join("\n")
}

// === Images ===

/// The two places an editor image stores its URL.
///
/// The lazy source, when present, always takes precedence over the displayed
/// source: the displayed one is frequently a blurred placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    /// `data-lazy-src` value.
    pub lazy: Option<String>,
    /// `src` value.
    pub displayed: Option<String>,
}

impl ImageSource {
    /// Read both sources from an `img` element.
    #[must_use]
    pub fn read(img: &Selection) -> Self {
        Self {
            lazy: get_attribute(img, LAZY_SRC_ATTR),
            displayed: get_attribute(img, "src"),
        }
    }

    /// The URL to use: lazy source first, then displayed source.
    #[must_use]
    pub fn resolve(&self) -> Option<&str> {
        self.lazy.as_deref().or(self.displayed.as_deref())
    }
}

/// First `img` under `sel` (or `sel` itself when it is an `img`).
#[must_use]
pub fn first_image<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    if sel.is("img") {
        return Some(sel.clone());
    }
    query_first(sel, "img")
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
