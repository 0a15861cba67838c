// Sentence segmentation over extracted document text.
//
// Uses the UAX #29 sentence-boundary rules from unicode-segmentation:
// generic prose rules, no per-document-type tuning. Line feeds count as
// paragraph separators under UAX #29, so callers unfold hard line
// breaks first (the pipeline does). The iterator is lazy and the same
// input always yields the same sequence.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate the sentences of `text` in source order.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_sentences()
}
