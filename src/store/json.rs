// JSON-file result store.
//
// The results file is a plain JSON array of group records
// ({question, similar_variants, frequency}), no schema version, no
// envelope. Saves go through a temp file and rename so an interrupted
// write can't leave a half-written results file behind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::AnalysisResult;

use super::ResultStore;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl ResultStore for JsonFileStore {
    async fn save(&self, result: &AnalysisResult) -> Result<()> {
        let json = serde_json::to_string_pretty(result).context("Failed to serialize results")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory for {}", self.path.display())
                })?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!(path = %self.path.display(), groups = result.len(), "Saved analysis results");
        Ok(())
    }

    async fn load(&self) -> Result<AnalysisResult> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path = %self.path.display(), "No results file, starting empty");
                return Ok(AnalysisResult::default());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Results file is corrupt, treating as empty"
                );
                Ok(AnalysisResult::default())
            }
        }
    }
}
