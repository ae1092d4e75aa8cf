//! Ordered image harvesting.
//!
//! Collects the canonical URL of every image in a post, in the order the images
//! appear. Editor markup changed across format revisions, so harvesting runs an
//! ordered list of strategies and keeps the first one that finds anything:
//!
//! 1. `modules`: image modules, scoped to content modules (exact order).
//! 2. `containers`: any element carrying an image marker.
//! 3. `any_image`: every `img` on the primary host that is not blurred.
//!
//! Every strategy canonicalizes each URL and deduplicates on first occurrence.

use log::debug;

use crate::canonical::{canonicalize, is_primary_host};
use crate::dom::{self, Document, ImageSource, Selection};
use crate::options::Markers;
use crate::patterns::{BLUR_MARKER, SCRIPT_IMAGE_TOKEN, SCRIPT_ORIGINAL_URL, SCRIPT_URL};
use crate::result::CanonicalImageList;

/// A harvesting strategy over a normalized subtree.
pub type Strategy = fn(&Selection, &Markers) -> CanonicalImageList;

/// Strategies in evaluation order.
pub const TIERS: [(&str, Strategy); 3] = [
    ("modules", harvest_modules),
    ("containers", harvest_containers),
    ("any_image", harvest_any_image),
];

/// Harvest canonical image URLs from `root`, first non-empty tier wins.
#[must_use]
pub fn harvest_images(root: &Selection, markers: &Markers) -> CanonicalImageList {
    for (name, strategy) in TIERS {
        let images = strategy(root, markers);
        if !images.is_empty() {
            debug!("harvest: tier `{name}` found {} image(s)", images.len());
            return images;
        }
        debug!("harvest: tier `{name}` found nothing");
    }
    CanonicalImageList::new()
}

/// Tier 1: first image of each content module that carries an image marker.
#[must_use]
pub fn harvest_modules(root: &Selection, markers: &Markers) -> CanonicalImageList {
    let mut images = CanonicalImageList::new();
    for module in dom::query_all(root, &markers.module) {
        if dom::contains(&module, &markers.image) {
            push_first_image(&module, &mut images);
        }
    }
    images
}

/// Tier 2: first image of each image-marker element, regardless of modules.
#[must_use]
pub fn harvest_containers(root: &Selection, markers: &Markers) -> CanonicalImageList {
    let mut images = CanonicalImageList::new();
    for container in dom::query_all(root, &markers.image) {
        push_first_image(&container, &mut images);
    }
    images
}

/// Tier 3: every unblurred `img` on the primary image host.
#[must_use]
pub fn harvest_any_image(root: &Selection, _markers: &Markers) -> CanonicalImageList {
    let mut images = CanonicalImageList::new();
    for img in dom::query_all(root, "img") {
        let source = ImageSource::read(&img);
        let Some(url) = source.resolve() else {
            continue;
        };
        if is_primary_host(url) && !url.contains(BLUR_MARKER) {
            images.push(canonicalize(url));
        }
    }
    images
}

/// Image URLs embedded in the editor's inline scripts.
///
/// Used when no tier finds an image in the markup. Scripts mentioning image
/// modules are scanned for `originalUrl` values first, then plain `url`
/// values; only primary-host URLs are kept, in first-seen order.
#[must_use]
pub fn harvest_script_images(doc: &Document) -> CanonicalImageList {
    let mut images = CanonicalImageList::new();

    for script in dom::elements(&doc.select("script")) {
        let body = script.text();
        if !body.contains(SCRIPT_IMAGE_TOKEN) {
            continue;
        }
        for pattern in [&*SCRIPT_ORIGINAL_URL, &*SCRIPT_URL] {
            for caps in pattern.captures_iter(&body) {
                let url = &caps[1];
                if is_primary_host(url) {
                    images.push(canonicalize(url));
                }
            }
        }
    }

    debug!("harvest: scripts yielded {} image(s)", images.len());
    images
}

fn push_first_image(sel: &Selection, images: &mut CanonicalImageList) {
    let Some(img) = dom::first_image(sel) else {
        return;
    };
    if let Some(url) = ImageSource::read(&img).resolve() {
        images.push(canonicalize(url));
    }
}
