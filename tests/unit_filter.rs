// Unit tests for question normalization and the inclusion predicate.
//
// These pin the exact filtering semantics: what counts as a question,
// what the normalized form looks like, and that normalization is
// idempotent.

use foolscap::filter::{filter_question, normalize};

// ============================================================
// normalize — character handling
// ============================================================

#[test]
fn normalize_lowercases_and_strips_punctuation() {
    assert_eq!(
        normalize("Explain Ohm's Law (V = IR)?"),
        "explain ohms law v  ir?"
    );
}

#[test]
fn normalize_keeps_digits_and_question_mark() {
    assert_eq!(
        normalize("What happens at 100 degrees Celsius?"),
        "what happens at 100 degrees celsius?"
    );
}

#[test]
fn normalize_trims_surrounding_whitespace() {
    assert_eq!(normalize("   What is torque?   "), "what is torque?");
}

#[test]
fn normalize_collapses_newlines_to_spaces() {
    assert_eq!(
        normalize("What is\nthe speed\nof light?"),
        "what is the speed of light?"
    );
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        "What is the capital of France?",
        "  Messy -- input; with (lots) of junk?  ",
        "already normalized question here?",
        "",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn normalize_strips_non_ascii_characters() {
    // The strip class is ASCII letters/digits only, so curly quotes and
    // accented characters are removed, not transliterated.
    assert_eq!(
        normalize("What’s the rôle of enzymes?"),
        "whats the rle of enzymes?"
    );
}

// ============================================================
// filter_question — inclusion predicate
// ============================================================

#[test]
fn accepts_question_with_enough_tokens() {
    // 6 tokens, ends in ?, has letters
    assert_eq!(
        filter_question("What is the capital of France?"),
        Some("what is the capital of france?".to_string())
    );
}

#[test]
fn rejects_two_token_question() {
    assert_eq!(filter_question("Is it?"), None);
}

#[test]
fn rejects_three_token_question() {
    // Token count must be strictly greater than 3.
    assert_eq!(filter_question("What is recursion?"), None);
}

#[test]
fn accepts_four_token_question() {
    assert_eq!(
        filter_question("What is tail recursion?"),
        Some("what is tail recursion?".to_string())
    );
}

#[test]
fn rejects_sentence_without_question_mark() {
    assert_eq!(filter_question("Recursion is a function calling itself."), None);
}

#[test]
fn rejects_question_with_no_letters() {
    assert_eq!(filter_question("1 2 3 4 5?"), None);
}

#[test]
fn rejects_empty_and_whitespace_input() {
    assert_eq!(filter_question(""), None);
    assert_eq!(filter_question(" \n \t "), None);
}

#[test]
fn question_mark_check_uses_original_sentence() {
    // The raw sentence ends in ")" so it is not treated as a question,
    // even though normalization would strip the paren.
    assert_eq!(filter_question("Define the term momentum (in SI units?)"), None);
}

#[test]
fn token_and_letter_checks_use_normalized_form() {
    // "one -- two -- three?" has five raw tokens but only three after
    // the dashes are stripped; the count is taken on the normalized form.
    assert_eq!(filter_question("one -- two -- three?"), None);
    assert_eq!(
        filter_question("one -- two -- three -- four?"),
        Some("one  two  three  four?".to_string())
    );
}

#[test]
fn output_is_already_normalized() {
    let q = filter_question("  WHY does\nthe SKY look blue?  ").unwrap();
    assert_eq!(normalize(&q), q);
}
