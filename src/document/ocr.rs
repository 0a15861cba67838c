// OCR engine trait — the fallback for image-only PDF pages.
//
// Scanned exam papers often have pages with no extractable text layer.
// The PDF loader hands those pages to an OcrEngine. The default
// implementation renders the page with `pdftoppm` and reads it with the
// `tesseract` CLI; both tools are best-effort, so every failure path is
// Ok(None) rather than an error. A page that cannot be OCR'd simply
// contributes no text.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

/// Trait for recovering text from a single PDF page image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Attempt OCR on page `page` (1-based) of the PDF at `pdf_path`.
    /// Ok(None) when the engine cannot produce text for the page.
    async fn ocr_page(&self, pdf_path: &Path, page: u32) -> Result<Option<String>>;
}

/// No-op engine used when OCR is disabled. Pages without a text layer
/// are skipped instead of OCR'd.
pub struct NoopOcr;

#[async_trait]
impl OcrEngine for NoopOcr {
    async fn ocr_page(&self, _pdf_path: &Path, page: u32) -> Result<Option<String>> {
        debug!(page, "OCR disabled, skipping image-only page");
        Ok(None)
    }
}

/// Tesseract-backed engine: renders the page to PNG with `pdftoppm`,
/// then runs `tesseract <png> stdout`.
pub struct TesseractOcr {
    /// Render resolution in DPI. 300 matches what tesseract's models
    /// were tuned for.
    dpi: u32,
}

impl TesseractOcr {
    pub fn new() -> Self {
        Self { dpi: 300 }
    }

    /// Scratch path for the rendered page image. pdftoppm appends the
    /// .png extension itself.
    fn render_prefix(page: u32) -> PathBuf {
        std::env::temp_dir().join(format!("foolscap-ocr-{}-p{}", std::process::id(), page))
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn ocr_page(&self, pdf_path: &Path, page: u32) -> Result<Option<String>> {
        let prefix = Self::render_prefix(page);
        let png_path = prefix.with_extension("png");

        let page_arg = page.to_string();
        let dpi_arg = self.dpi.to_string();
        let render = Command::new("pdftoppm")
            .arg("-f")
            .arg(&page_arg)
            .arg("-l")
            .arg(&page_arg)
            .arg("-r")
            .arg(&dpi_arg)
            .arg("-png")
            .arg("-singlefile")
            .arg(pdf_path)
            .arg(&prefix)
            .output()
            .await;

        match render {
            Ok(out) if out.status.success() => {}
            Ok(out) => {
                warn!(
                    page,
                    status = %out.status,
                    "pdftoppm failed, page will contribute no text"
                );
                return Ok(None);
            }
            Err(e) => {
                warn!(page, error = %e, "pdftoppm not available, skipping OCR");
                return Ok(None);
            }
        }

        let recognize = Command::new("tesseract")
            .arg(&png_path)
            .arg("stdout")
            .output()
            .await;

        // Scratch image is no longer needed whatever tesseract did.
        let _ = std::fs::remove_file(&png_path);

        match recognize {
            Ok(out) if out.status.success() => {
                let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
                if text.is_empty() {
                    Ok(None)
                } else {
                    debug!(page, chars = text.len(), "OCR recovered text");
                    Ok(Some(text))
                }
            }
            Ok(out) => {
                warn!(
                    page,
                    status = %out.status,
                    "tesseract failed, page will contribute no text"
                );
                Ok(None)
            }
            Err(e) => {
                warn!(page, error = %e, "tesseract not available, skipping OCR");
                Ok(None)
            }
        }
    }
}
