// PDF text extraction via lopdf, page by page.
//
// Before extraction, a "cleaned" copy of the file is written next to
// the original with page annotations stripped. Overlay watermarks
// usually live in annotation objects, and stripping them keeps their
// text out of the sentence stream. Extraction then runs against the
// cleaned copy. If cleaning fails for any reason the original file is
// used as-is.
//
// A page with no extractable text layer is handed to the OCR engine.

use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::{debug, warn};

use super::ocr::OcrEngine;
use super::ExtractionError;

/// Extract the full text of a PDF, concatenating pages in order.
pub async fn extract_pdf(path: &Path, ocr: &dyn OcrEngine) -> Result<String, ExtractionError> {
    let source = match clean_copy(path) {
        Ok(cleaned) => cleaned,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Watermark strip failed, using original file");
            path.to_path_buf()
        }
    };

    let doc = Document::load(&source)
        .map_err(|e| ExtractionError::Malformed(path.to_path_buf(), e.to_string()))?;

    let mut text = String::new();
    for (&page_no, _) in doc.get_pages().iter() {
        let mut page_text = doc.extract_text(&[page_no]).unwrap_or_default();

        if page_text.trim().is_empty() {
            debug!(page = page_no, "No text layer, trying OCR");
            page_text = ocr
                .ocr_page(&source, page_no)
                .await
                .unwrap_or(None)
                .unwrap_or_default();
        }

        if !page_text.trim().is_empty() {
            text.push_str(page_text.trim_end());
            text.push('\n');
        }
    }

    Ok(text.trim().to_string())
}

/// Write a copy of the PDF with page annotations removed, returning the
/// path of the copy (`<stem>_cleaned.pdf` next to the original).
fn clean_copy(path: &Path) -> anyhow::Result<PathBuf> {
    let mut doc = Document::load(path)?;

    let page_ids: Vec<_> = doc.get_pages().values().copied().collect();
    let mut stripped = 0usize;
    for page_id in page_ids {
        let page = doc.get_object_mut(page_id)?;
        let dict = page.as_dict_mut()?;
        if dict.remove(b"Annots").is_some() {
            stripped += 1;
        }
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let cleaned = path.with_file_name(format!("{stem}_cleaned.pdf"));
    doc.save(&cleaned)?;

    debug!(
        path = %cleaned.display(),
        pages_stripped = stripped,
        "Wrote cleaned PDF copy"
    );
    Ok(cleaned)
}
