// Greedy single-pass clustering of distinct questions.
//
// Each unused question in turn seeds a group and becomes its
// representative; every later unused question whose embedding clears
// the similarity threshold joins that group. One pass, first seed wins:
// when A~B and B~C but A and C are not similar, C's group depends on
// which seed came first in the distinct order.
//
// Comparisons happen at most once per unordered pair (used members are
// skipped), so the worst case is O(n²) over distinct questions.

use crate::models::{AnalysisResult, QuestionGroup};
use crate::tally::FrequencyTable;

use super::similarity::cosine_similarity;

/// Partition `distinct` questions into similarity groups.
///
/// `embeddings[i]` must be the vector for `distinct[i]`. Group frequency
/// is the sum of table counts over members, so the totals line up with
/// the per-occurrence tally rather than the reduced distinct set.
/// Deterministic for a fixed input order and fixed embeddings.
pub fn group_questions(
    distinct: &[String],
    embeddings: &[Vec<f64>],
    table: &FrequencyTable,
    threshold: f64,
) -> AnalysisResult {
    let mut used = vec![false; distinct.len()];
    let mut groups = Vec::new();

    for i in 0..distinct.len() {
        if used[i] {
            continue;
        }
        used[i] = true;

        let mut variants = vec![distinct[i].clone()];

        // Everything before i is already assigned, so scanning forward
        // covers all remaining candidates.
        for j in (i + 1)..distinct.len() {
            if used[j] {
                continue;
            }
            // Strictly greater: a pair sitting exactly on the threshold
            // stays apart.
            if cosine_similarity(&embeddings[i], &embeddings[j]) > threshold {
                used[j] = true;
                variants.push(distinct[j].clone());
            }
        }

        let frequency = variants.iter().map(|v| table.count(v)).sum();
        groups.push(QuestionGroup {
            question: variants[0].clone(),
            similar_variants: variants,
            frequency,
        });
    }

    AnalysisResult::new(groups)
}
