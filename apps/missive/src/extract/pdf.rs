//! PDF text extraction via `lopdf`, page by page.

use lopdf::Document;
use tracing::{debug, warn};

/// Extracts text from every page, skipping pages that fail or come
/// back empty. Returns an empty string if the document cannot be
/// loaded at all.
pub fn extract_text(bytes: &[u8]) -> String {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Failed to read PDF file. The file may be corrupted: {e}");
            return String::new();
        }
    };

    let mut out = String::new();
    for (page_num, _object_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(text) if !text.trim().is_empty() => {
                out.push_str(text.trim_end());
                out.push('\n');
            }
            Ok(_) => debug!("Page {page_num} produced no text, skipping"),
            Err(e) => debug!("Skipping page {page_num}: {e}"),
        }
    }
    out.trim().to_string()
}
