// Composition tests — verifying that pipeline stages chain correctly.
//
// These exercise the data flow between modules:
//   Segmenter -> Filter -> Tally -> Grouper
// and the full batch pipeline over a generated DOCX fixture, using a
// stub embedder so no model files or network access are needed.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use foolscap::document::ocr::NoopOcr;
use foolscap::filter;
use foolscap::grouping::embedder::Embedder;
use foolscap::grouping::greedy::group_questions;
use foolscap::grouping::DEFAULT_SIMILARITY_THRESHOLD;
use foolscap::pipeline::analyze;
use foolscap::segment;
use foolscap::tally::FrequencyTable;

/// Embedder stub: looks vectors up in a fixed map. Unknown input is an
/// error so a test can't silently group against a zero vector.
struct StubEmbedder {
    vectors: HashMap<String, Vec<f64>>,
}

impl StubEmbedder {
    fn new(entries: &[(&str, Vec<f64>)]) -> Self {
        Self {
            vectors: entries
                .iter()
                .map(|(q, v)| (q.to_string(), v.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        texts
            .iter()
            .map(|t| {
                self.vectors
                    .get(t)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("no stub vector for {t:?}"))
            })
            .collect()
    }
}

/// Run one text blob through segmentation and filtering into a table,
/// unfolding hard line breaks first the way the pipeline does.
fn tally_text(text: &str, table: &mut FrequencyTable) {
    let text = text.replace('\n', " ");
    for sentence in segment::sentences(&text) {
        if let Some(question) = filter::filter_question(sentence) {
            table.record(question);
        }
    }
}

// ============================================================
// Chain: Segmenter -> Filter -> Tally
// ============================================================

#[test]
fn questions_are_extracted_and_statements_dropped() {
    let mut table = FrequencyTable::new();
    tally_text(
        "Answer all questions. What is the capital of France? \
         Paris has been the capital since 508. Is it? \
         Explain why the sky appears blue?",
        &mut table,
    );

    assert_eq!(
        table.distinct(),
        &[
            "what is the capital of france?",
            "explain why the sky appears blue?"
        ]
    );
    assert_eq!(table.total(), 2);
}

#[test]
fn verbatim_question_in_two_documents_tallies_twice() {
    let mut table = FrequencyTable::new();
    tally_text("What is recursion in programming?", &mut table);
    tally_text("Intro section. What is recursion in programming?", &mut table);

    assert_eq!(table.count("what is recursion in programming?"), 2);
    assert_eq!(table.len(), 1);
}

#[test]
fn line_broken_question_normalizes_to_one_key() {
    // The same question hard-wrapped differently in two papers still
    // tallies under one key.
    let mut table = FrequencyTable::new();
    tally_text("What is the capital\nof France?", &mut table);
    tally_text("What is the capital of France?", &mut table);

    assert_eq!(table.count("what is the capital of france?"), 2);
}

// ============================================================
// Chain: Tally -> Grouper
// ============================================================

#[tokio::test]
async fn full_chain_groups_and_conserves_frequency() {
    let mut table = FrequencyTable::new();
    tally_text(
        "What is the capital of France? How do plants make food?",
        &mut table,
    );
    tally_text(
        "Name the capital city of France? What is the capital of France?",
        &mut table,
    );

    let embedder = StubEmbedder::new(&[
        ("what is the capital of france?", vec![1.0, 0.0]),
        ("name the capital city of france?", vec![0.9, 0.2]),
        ("how do plants make food?", vec![0.0, 1.0]),
    ]);

    let distinct = table.distinct().to_vec();
    let embeddings = embedder.embed_batch(&distinct).await.unwrap();
    let result = group_questions(&distinct, &embeddings, &table, DEFAULT_SIMILARITY_THRESHOLD);

    // Two capital-of-France variants merge; photosynthesis stands alone.
    assert_eq!(result.len(), 2);
    let capital = &result.groups[0];
    assert_eq!(capital.question, "what is the capital of france?");
    assert_eq!(capital.similar_variants.len(), 2);
    assert_eq!(capital.frequency, 3);

    assert_eq!(result.total_frequency(), table.total());
}

// ============================================================
// Full pipeline over real files
// ============================================================

fn scratch_docx(name: &str, paragraphs: &[&str]) -> PathBuf {
    use docx_rs::{Docx, Paragraph, Run};

    let path = std::env::temp_dir().join(format!(
        "foolscap-comp-{}-{}.docx",
        std::process::id(),
        name
    ));

    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }

    let file = std::fs::File::create(&path).unwrap();
    docx.build().pack(file).unwrap();
    path
}

#[tokio::test]
async fn pipeline_analyzes_docx_batch() {
    let doc_a = scratch_docx(
        "batch-a",
        &[
            "Section A. Answer three of the following.",
            "What is the capital of France?",
            "How do plants make food?",
        ],
    );
    let doc_b = scratch_docx(
        "batch-b",
        &["What is the capital of France?", "Is it?"],
    );

    let embedder = StubEmbedder::new(&[
        ("what is the capital of france?", vec![1.0, 0.0]),
        ("how do plants make food?", vec![0.0, 1.0]),
    ]);

    let paths = vec![doc_a.clone(), doc_b.clone()];
    let result = analyze::run(&paths, &NoopOcr, &embedder, DEFAULT_SIMILARITY_THRESHOLD)
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.total_frequency(), 3);
    let capital = result
        .groups
        .iter()
        .find(|g| g.question == "what is the capital of france?")
        .expect("capital group present");
    assert_eq!(capital.frequency, 2, "verbatim repeat across documents");

    let _ = std::fs::remove_file(&doc_a);
    let _ = std::fs::remove_file(&doc_b);
}

#[tokio::test]
async fn pipeline_skips_unsupported_extensions() {
    let path = std::env::temp_dir().join(format!("foolscap-comp-{}.txt", std::process::id()));
    std::fs::write(&path, "What is the capital of France?").unwrap();

    let embedder = StubEmbedder::new(&[]);
    let result = analyze::run(
        &[path.clone()],
        &NoopOcr,
        &embedder,
        DEFAULT_SIMILARITY_THRESHOLD,
    )
    .await
    .unwrap();

    assert!(result.is_empty(), ".txt input must be skipped, not parsed");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn pipeline_survives_unreadable_document() {
    // One missing PDF and one good DOCX: the missing file is skipped
    // with a warning and the good one is still analyzed.
    let good = scratch_docx("survivor", &["Explain why the sky appears blue?"]);
    let missing = PathBuf::from("/nonexistent/lost-exam.pdf");

    let embedder = StubEmbedder::new(&[("explain why the sky appears blue?", vec![1.0, 0.0])]);

    let result = analyze::run(
        &[missing, good.clone()],
        &NoopOcr,
        &embedder,
        DEFAULT_SIMILARITY_THRESHOLD,
    )
    .await
    .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.groups[0].question, "explain why the sky appears blue?");

    let _ = std::fs::remove_file(&good);
}

#[tokio::test]
async fn pipeline_with_no_questions_is_empty_not_error() {
    let doc = scratch_docx(
        "no-questions",
        &["All answers must be written in ink.", "Good luck."],
    );

    // The embedder would error on any input; an empty distinct set must
    // short-circuit before it is ever invoked.
    let embedder = StubEmbedder::new(&[]);

    let result = analyze::run(
        &[doc.clone()],
        &NoopOcr,
        &embedder,
        DEFAULT_SIMILARITY_THRESHOLD,
    )
    .await
    .unwrap();

    assert!(result.is_empty());

    let _ = std::fs::remove_file(&doc);
}

#[tokio::test]
async fn pipeline_with_empty_batch_is_empty() {
    let embedder = StubEmbedder::new(&[]);
    let result = analyze::run(&[], &NoopOcr, &embedder, DEFAULT_SIMILARITY_THRESHOLD)
        .await
        .unwrap();
    assert!(result.is_empty());
}
