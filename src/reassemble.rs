//! Reassembly of paragraph text and image placeholders.
//!
//! The normalized output interleaves paragraphs with three-line placeholder
//! blocks:
//!
//! ```text
//! [image: image_001.png]
//! [path: out/image_001.png]
//! [source-url: https://postfiles.pstatic.net/...]
//! ```
//!
//! Blocks and paragraphs are separated by blank lines. Downstream tools find
//! images again through the `image_NNN.ext` names, so the delimiters here are
//! a stable contract.

use std::fmt::Write as _;
use std::path::Path;

use log::debug;

use crate::options::Options;
use crate::patterns::IMAGE_TOKEN;
use crate::result::{CanonicalImageList, ContentItem};

/// Synthetic filename for the 1-based image `index`.
#[must_use]
pub fn image_filename(index: usize, extension: &str) -> String {
    format!("image_{index:03}.{extension}")
}

/// Split text into paragraphs: maximal runs of non-blank lines, trimmed.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.trim().to_string());
                current.clear();
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.trim().to_string());
    }

    paragraphs
}

/// Interleave `text` with placeholder blocks for `images`.
///
/// With a non-empty `structure`, paragraphs and `Text` items are consumed in
/// lockstep and each `Image` item emits the next placeholder; leftover
/// paragraphs and then leftover images are appended at the end. With an
/// empty structure the images are spread over the paragraphs at an even
/// interval. Without images only the paragraphs are returned.
#[must_use]
pub fn reassemble(
    text: &str,
    images: &CanonicalImageList,
    structure: &[ContentItem],
    options: &Options,
) -> String {
    let paragraphs = split_paragraphs(text);

    if images.is_empty() {
        return paragraphs.join("\n\n");
    }

    let mut out = Output::new(options);
    if structure.is_empty() {
        distribute(&paragraphs, images, &mut out);
    } else {
        follow_structure(&paragraphs, images, structure, &mut out);
    }

    out.finish()
}

/// Lockstep walk of the structure.
fn follow_structure(
    paragraphs: &[String],
    images: &CanonicalImageList,
    structure: &[ContentItem],
    out: &mut Output,
) {
    let mut next_paragraph = 0;
    let mut next_image = 0;

    for item in structure {
        match item {
            ContentItem::Text { .. } => {
                if let Some(paragraph) = paragraphs.get(next_paragraph) {
                    out.paragraph(paragraph);
                    next_paragraph += 1;
                }
            }
            ContentItem::Image { url, .. } => {
                let url = images.get(next_image).unwrap_or(url.as_str());
                out.placeholder(url);
                next_image += 1;
            }
        }
    }

    for paragraph in paragraphs.iter().skip(next_paragraph) {
        out.paragraph(paragraph);
    }
    for url in images.iter().skip(next_image) {
        out.placeholder(url);
    }
}

/// Even spread used when no structure is known.
///
/// The interval is `max(1, paragraphs / (images + 1))`; an image follows every
/// interval-th paragraph except the first. Images left over once the
/// paragraphs run out are not placed.
fn distribute(paragraphs: &[String], images: &CanonicalImageList, out: &mut Output) {
    let interval = (paragraphs.len() / (images.len() + 1)).max(1);
    let mut pending = images.iter();

    debug!(
        "reassemble: no structure, {} paragraph(s), {} image(s), interval {interval}",
        paragraphs.len(),
        images.len()
    );

    for (i, paragraph) in paragraphs.iter().enumerate() {
        out.paragraph(paragraph);
        let position = i + 1;
        if position > 1 && position % interval == 0 {
            if let Some(url) = pending.next() {
                out.placeholder(url);
            }
        }
    }
}

/// Accumulates output blocks and numbers placeholders sequentially.
struct Output<'a> {
    buf: String,
    placed: usize,
    dir: &'a Path,
    extension: &'a str,
}

impl<'a> Output<'a> {
    fn new(options: &'a Options) -> Self {
        Self {
            buf: String::new(),
            placed: 0,
            dir: &options.image_dir,
            extension: &options.image_extension,
        }
    }

    fn paragraph(&mut self, paragraph: &str) {
        self.buf.push_str(paragraph);
        self.buf.push_str("\n\n");
    }

    fn placeholder(&mut self, url: &str) {
        self.placed += 1;
        let name = image_filename(self.placed, self.extension);
        let path = self.dir.join(&name);
        let _ = write!(
            self.buf,
            "[image: {name}]\n[path: {}]\n[source-url: {url}]\n\n",
            path.display()
        );
    }

    fn finish(self) -> String {
        self.buf.trim().to_string()
    }
}

/// A parsed image reference from normalized text or simplified markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageToken<'t> {
    /// 1-based image number.
    pub index: usize,
    /// File extension.
    pub extension: &'t str,
}

/// Find `{image_NNN.ext}` tokens and `[image: image_NNN.ext]` lines, in order.
///
/// # Examples
///
/// ```
/// use se_extract::reassemble::image_tokens;
///
/// let tokens = image_tokens("<img src=\"a\">\n{image_002.png}");
/// assert_eq!(tokens[0].index, 2);
/// assert_eq!(tokens[0].extension, "png");
/// ```
#[must_use]
pub fn image_tokens(text: &str) -> Vec<ImageToken<'_>> {
    IMAGE_TOKEN
        .captures_iter(text)
        .filter_map(|caps| {
            let (index, extension) = match (caps.get(1), caps.get(2)) {
                (Some(index), Some(ext)) => (index, ext),
                _ => (caps.get(3)?, caps.get(4)?),
            };
            Some(ImageToken {
                index: index.as_str().parse().ok()?,
                extension: extension.as_str(),
            })
        })
        .collect()
}
