use std::path::Path;

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::warn;

/// Extracts text page by page and joins the pages with `\n`.
///
/// A page that yields no text contributes an empty segment, so an N-page
/// document always produces N segments. Only a document that cannot be loaded
/// at all is an error.
pub(super) fn extract_pdf(path: &Path) -> Result<String> {
    let doc = Document::load(path).with_context(|| format!("cannot parse PDF {}", path.display()))?;

    let pages: Vec<String> = doc
        .get_pages()
        .into_keys()
        .map(|page_number| page_text(&doc, page_number))
        .collect();

    Ok(pages.join("\n"))
}

fn page_text(doc: &Document, page_number: u32) -> String {
    match doc.extract_text(&[page_number]) {
        // lopdf terminates every text object with a line break
        Ok(text) => text.trim_end_matches(['\r', '\n']).to_string(),
        Err(e) => {
            warn!("PDF page {page_number} has no extractable text: {e}");
            String::new()
        }
    }
}
