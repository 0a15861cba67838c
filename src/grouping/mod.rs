// Similarity grouping — clusters distinct questions by embedding similarity.

pub mod embedder;
pub mod greedy;
pub mod similarity;

/// Default cosine-similarity threshold for putting two questions in the
/// same group. Pairs at exactly the threshold stay apart; the compare is
/// strictly greater-than.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;
