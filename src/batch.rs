//! Independent extraction of many documents.
//!
//! A failure in one document never affects the others: it is logged and
//! reported in that document's slot.

use log::{info, warn};
use serde::Deserialize;

use crate::error::Result;
use crate::extract::extract_document;
use crate::options::Options;
use crate::result::ExtractResult;

/// One document to extract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchInput {
    /// Source URL of the post; overrides `Options::url` for this document.
    pub url: Option<String>,
    /// Page markup.
    pub html: String,
    /// Markup of the embedded post frame, when already fetched.
    pub frame_html: Option<String>,
}

/// Outcome for one document of a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Position of the document in the input.
    pub index: usize,
    /// Source URL, if known.
    pub url: Option<String>,
    /// Extraction result or the error that stopped this document.
    pub result: Result<ExtractResult>,
}

/// Extract every input in order, isolating failures per document.
#[must_use]
pub fn extract_batch(inputs: &[BatchInput], options: &Options) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let url = input.url.clone().or_else(|| options.url.clone());
            let doc_options = Options {
                url: url.clone(),
                ..options.clone()
            };
            let result = extract_document(&input.html, input.frame_html.as_deref(), &doc_options);
            if let Err(err) = &result {
                warn!("document {index} ({}): {err}", url.as_deref().unwrap_or("no url"));
            }
            BatchOutcome { index, url, result }
        })
        .collect();

    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    info!("batch finished: {succeeded}/{} document(s) extracted", outcomes.len());

    outcomes
}
