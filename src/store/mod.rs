// Result storage — persistence for the grouped question set.
//
// One analysis run produces one AnalysisResult; saving fully replaces
// whatever was stored before. Loading is forgiving: a missing or
// corrupt file reads as "no prior results", never as a fatal error.

pub mod json;

pub use self::json::JsonFileStore;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::AnalysisResult;

/// Backend-agnostic interface for persisting analysis results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist the result set, replacing any prior content.
    async fn save(&self, result: &AnalysisResult) -> Result<()>;

    /// Load the most recently saved result set. Missing or unreadable
    /// storage yields an empty result.
    async fn load(&self) -> Result<AnalysisResult>;
}

/// Open the default store at the configured data path.
pub fn open(data_path: &str) -> Arc<dyn ResultStore> {
    Arc::new(JsonFileStore::new(data_path))
}
