// DOCX text extraction via docx-rs.
//
// A .docx file is a ZIP of XML parts; docx-rs exposes the document body
// as a typed tree. The path to the words is
// Document -> Paragraph -> Run -> Text; we collect every Text node,
// joining runs within a paragraph directly and paragraphs with
// newlines. Only the body is walked: headers and footers (where
// watermark text lives) never enter the stream.

use std::fs;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::ExtractionError;

/// Extract the body text of a DOCX file.
pub fn extract_docx(path: &Path) -> Result<String, ExtractionError> {
    let bytes = fs::read(path)
        .map_err(|e| ExtractionError::Unreadable(path.to_path_buf(), e.to_string()))?;

    let docx = read_docx(&bytes)
        .map_err(|e| ExtractionError::Malformed(path.to_path_buf(), format!("{e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        // Only paragraph nodes carry prose; tables and section breaks
        // are skipped.
        if let DocumentChild::Paragraph(para) = child {
            let para_text = paragraph_text(para);
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    Ok(paragraphs.join("\n").trim().to_string())
}

/// Collect the text runs of one paragraph. Runs are fragments of the
/// same sentence, so they join with no separator.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}
