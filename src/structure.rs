//! Structural walk over editor content modules.
//!
//! Each content module is one semantic unit produced by the editor: a text
//! block or an image insertion. Walking the modules in document order recovers
//! the author's interleaving of text and images.

use log::debug;

use crate::dom::{self, ImageSource, Selection};
use crate::options::Markers;
use crate::result::{ContentItem, ContentStructure};

/// Walk the content modules under `root` and emit one item per module.
///
/// A module containing the text marker yields a `Text` item with its visible
/// text, dropped when blank. Otherwise a module containing an image marker
/// yields an `Image` item built from its first `img`. Text wins when a module
/// carries both markers; modules with neither are skipped.
///
/// Returns an empty structure when no recognized module exists. The image
/// attributes should already be normalized.
#[must_use]
pub fn extract_structure(root: &Selection, markers: &Markers) -> ContentStructure {
    let mut structure = ContentStructure::new();

    for module in dom::query_all(root, &markers.module) {
        if let Some(item) = module_item(&module, markers) {
            structure.push(item);
        }
    }

    debug!(
        "structure: {} text, {} image item(s)",
        structure.iter().filter(|i| i.is_text()).count(),
        structure.iter().filter(|i| i.is_image()).count()
    );

    structure
}

fn module_item(module: &Selection, markers: &Markers) -> Option<ContentItem> {
    if dom::contains(module, &markers.text) {
        let body = dom::visible_text(module);
        return (!body.is_empty()).then_some(ContentItem::Text { body });
    }

    if dom::contains(module, &markers.image) {
        return image_item(module);
    }

    None
}

fn image_item(module: &Selection) -> Option<ContentItem> {
    let img = dom::first_image(module)?;
    let url = ImageSource::read(&img).resolve()?.to_string();

    Some(ContentItem::Image {
        url,
        alt: dom::attribute_or_empty(&img, "alt"),
        width: dom::attribute_or_empty(&img, "data-width"),
        height: dom::attribute_or_empty(&img, "data-height"),
    })
}
