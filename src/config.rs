use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::grouping::DEFAULT_SIMILARITY_THRESHOLD;

/// Which OCR backend to use for image-only PDF pages.
#[derive(Debug, Clone, PartialEq)]
pub enum OcrBackend {
    /// pdftoppm + tesseract CLI (default). Best-effort; pages are
    /// skipped when the tools are missing.
    Tesseract,
    /// No OCR; image-only pages contribute no text.
    Off,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so a bare `foolscap analyze paper.pdf` works
/// out of the box once the model is downloaded.
pub struct Config {
    /// Path of the results file (JSON array of question groups).
    pub data_path: String,
    /// Directory containing the embedding model files.
    pub model_dir: PathBuf,
    /// OCR backend for image-only PDF pages.
    pub ocr_backend: OcrBackend,
    /// Cosine-similarity threshold for grouping (strictly greater-than).
    pub similarity_threshold: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let ocr_backend = match env::var("FOOLSCAP_OCR").as_deref() {
            Ok("off") => OcrBackend::Off,
            // "tesseract" or unset both default to tesseract
            _ => OcrBackend::Tesseract,
        };

        let model_dir = env::var("FOOLSCAP_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::download::default_model_dir());

        let similarity_threshold = match env::var("FOOLSCAP_SIMILARITY_THRESHOLD") {
            Ok(raw) => raw.parse::<f64>().map_err(|_| {
                anyhow::anyhow!("FOOLSCAP_SIMILARITY_THRESHOLD is not a number: {raw}")
            })?,
            Err(_) => DEFAULT_SIMILARITY_THRESHOLD,
        };

        Ok(Self {
            data_path: env::var("FOOLSCAP_DATA_PATH")
                .unwrap_or_else(|_| "./foolscap-results.json".to_string()),
            model_dir,
            ocr_backend,
            similarity_threshold,
        })
    }

    /// Check that the embedding model files are present.
    /// Call this before any operation that needs to embed questions.
    pub fn require_embedder(&self) -> Result<()> {
        if !crate::download::model_files_present(&self.model_dir) {
            anyhow::bail!(
                "Embedding model files not found in {}\n\
                 Run `foolscap download-model` to download them.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}
