// Question filtering and normalization.
//
// Sentences arrive from the segmenter in whatever shape the document
// extraction produced: mixed case, stray punctuation, leftover line
// breaks. Normalization reduces each sentence to lowercase
// letters, digits, whitespace, and `?`, so that the same question
// printed in two different papers tallies under one key.
//
// The inclusion predicate is deliberately cheap: ends with `?`, more
// than three tokens, at least one letter. Everything else (numbering
// fragments, "Is it?", formula debris) is dropped without error.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Minimum token count (exclusive) for a sentence to count as a question.
/// Three-word fragments like "why is that?" are too short to group reliably.
const MIN_TOKENS: usize = 3;

fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s?]").expect("valid strip pattern"))
}

/// Normalize a sentence for tallying and grouping.
///
/// Embedded newlines become single spaces, every character outside
/// letters/digits/whitespace/`?` is removed, the rest is lowercased and
/// trimmed. Idempotent: normalizing a normalized string is a no-op.
pub fn normalize(sentence: &str) -> String {
    let unfolded = sentence.replace('\n', " ");
    strip_pattern()
        .replace_all(&unfolded, "")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Apply the question predicate to one sentence.
///
/// The `?` check looks at the original sentence (trimmed); the token
/// and letter checks look at the normalized form. Returns the
/// normalized form when the sentence qualifies, `None` otherwise.
/// Malformed input never errors, it just fails the predicate.
pub fn filter_question(sentence: &str) -> Option<String> {
    if !sentence.trim_end().ends_with('?') {
        return None;
    }

    let normalized = normalize(sentence);
    if normalized.split_whitespace().count() <= MIN_TOKENS {
        return None;
    }
    if !normalized.chars().any(|c| c.is_alphabetic()) {
        return None;
    }

    Some(normalized)
}
