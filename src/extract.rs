//! Per-document extraction pipeline.
//!
//! Locates the post container, normalizes its image attributes, then derives
//! the structure, the canonical image list, and the normalized text from the
//! same normalized subtree.

use log::debug;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::harvest::{harvest_images, harvest_script_images};
use crate::markup::simplified_html;
use crate::normalize::normalize;
use crate::options::Options;
use crate::reassemble::reassemble;
use crate::result::{ContentItem, ContentStructure, ExtractResult};
use crate::structure::extract_structure;
use crate::url_utils::{parse_post_id, resolve_frame_url};

/// Extract a post from its page markup, or from the embedded frame markup
/// when the page itself has no container.
pub(crate) fn extract_document(primary: &str, frame: Option<&str>, options: &Options) -> Result<ExtractResult> {
    if primary.trim().is_empty() {
        return Err(Error::ParseError("empty document".to_string()));
    }

    debug!("Starting content extraction (HTML length: {} chars)", primary.len());

    let markers = &options.markers;
    let page = dom::parse(primary);
    let page_title = find_title(&page, &markers.title);

    if let Some(container) = first_match(&page, &markers.container) {
        return Ok(build_result(&page, &container, page_title, options));
    }

    let frame_url = locate_frame(&page, options);

    if let Some(frame) = frame {
        let frame_doc = dom::parse(frame);
        if let Some(container) = first_match(&frame_doc, &markers.container) {
            debug!("container found in frame document");
            let title = page_title.or_else(|| find_title(&frame_doc, &markers.title));
            return Ok(build_result(&frame_doc, &container, title, options));
        }
    }

    debug!("no content container (frame: {frame_url:?})");
    Err(Error::NoContainer { frame_url })
}

/// Resolved URL of the embedded post frame, if the page has one.
pub(crate) fn frame_url(html: &str, options: &Options) -> Option<String> {
    locate_frame(&dom::parse(html), options)
}

fn locate_frame(doc: &Document, options: &Options) -> Option<String> {
    let frame = first_match(doc, &options.markers.frame)?;
    let src = dom::get_attribute(&frame, "src")?;
    resolve_frame_url(&src, &options.frame_base_url)
}

fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    dom::elements(&doc.select(selector)).into_iter().next()
}

fn find_title(doc: &Document, selector: &str) -> Option<String> {
    let title = first_match(doc, selector)?;
    let text = dom::clean_line(&title.text());
    (!text.is_empty()).then_some(text)
}

fn build_result(doc: &Document, container: &Selection, title: Option<String>, options: &Options) -> ExtractResult {
    let markers = &options.markers;
    let mut warnings = Vec::new();

    // Walker and harvester read the rewritten attributes.
    normalize(container);

    let structure = extract_structure(container, markers);
    if structure.is_empty() {
        warnings.push("No content modules found; images spread evenly over paragraphs".to_string());
    }

    let mut images = harvest_images(container, markers);
    if images.is_empty() && options.script_fallback {
        images = harvest_script_images(doc);
        if !images.is_empty() {
            warnings.push(format!("{} image(s) recovered from inline scripts", images.len()));
        }
    }

    let content_text = paragraph_text(container, &structure);
    let normalized = reassemble(&content_text, &images, &structure, options);

    ExtractResult {
        post: options.url.as_deref().and_then(parse_post_id),
        title,
        content_html: dom::outer_html(container).to_string(),
        content_text,
        normalized,
        simplified_html: simplified_html(container, options),
        structure,
        images,
        warnings,
    }
}

/// Paragraph text fed to the reassembler.
///
/// Text items become one paragraph each. Without structure, each paragraph
/// element of the container becomes one.
fn paragraph_text(container: &Selection, structure: &ContentStructure) -> String {
    let bodies: Vec<&str> = structure
        .iter()
        .filter_map(|item| match item {
            ContentItem::Text { body } => Some(body.as_str()),
            ContentItem::Image { .. } => None,
        })
        .collect();

    if bodies.is_empty() {
        dom::paragraph_lines(container).join("\n\n")
    } else {
        bodies.join("\n\n")
    }
}
