// Document loading — turns a PDF or DOCX file into raw text.
//
// The supported formats are a closed enum. Anything else is reported as
// "not a document we handle" via `DocumentKind::from_path` returning
// None, and the batch caller skips it silently. Extraction failures on
// supported formats surface as a typed ExtractionError so the caller
// can skip the one document and keep the run alive.

pub mod docx;
pub mod ocr;
pub mod pdf;

use std::path::{Path, PathBuf};

use thiserror::Error;

use self::ocr::OcrEngine;

/// Errors from loading a single document.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("cannot read {}: {}", .0.display(), .1)]
    Unreadable(PathBuf, String),

    #[error("malformed document {}: {}", .0.display(), .1)]
    Malformed(PathBuf, String),
}

/// The document formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classify a path by extension (case-insensitive). None means the
    /// file is not a supported document and should be skipped.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extract the full text of one document.
///
/// PDF pages that yield no text fall back to the OCR engine; DOCX
/// extraction never needs OCR.
pub async fn extract(
    path: &Path,
    kind: DocumentKind,
    ocr: &dyn OcrEngine,
) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => pdf::extract_pdf(path, ocr).await,
        DocumentKind::Docx => docx::extract_docx(path),
    }
}
