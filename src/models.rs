// Data models — the types that flow out of an analysis run.
//
// These are separate from the result store so other modules can use them
// without depending on the storage backend. The serde field names double
// as the persisted schema, so renaming a field is a format change.

use serde::{Deserialize, Serialize};

/// One cluster of semantically equivalent questions.
///
/// `question` is the representative (the first member encountered during
/// grouping) and always appears as `similar_variants[0]`. `frequency` is
/// the combined occurrence count of every variant across the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionGroup {
    pub question: String,
    pub similar_variants: Vec<String>,
    pub frequency: u32,
}

/// The ordered set of question groups produced by one analysis run.
///
/// Serializes as a plain array of group records, the same layout the
/// results file uses on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    pub groups: Vec<QuestionGroup>,
}

impl AnalysisResult {
    pub fn new(groups: Vec<QuestionGroup>) -> Self {
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Total occurrence count across all groups. Equals the number of
    /// sentences that passed the question filter for the run.
    pub fn total_frequency(&self) -> u32 {
        self.groups.iter().map(|g| g.frequency).sum()
    }

    /// Groups ordered by frequency descending, for display and export.
    /// Ties keep their original grouping order.
    pub fn sorted_by_frequency(&self) -> Vec<QuestionGroup> {
        let mut sorted = self.groups.clone();
        sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        sorted
    }
}
