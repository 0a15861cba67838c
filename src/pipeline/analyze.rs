// Batch analysis pipeline: documents -> sentences -> questions -> groups.
//
// Documents are processed strictly in order, one at a time, into a
// single shared frequency table. A document that fails extraction is
// skipped with a warning and the run continues; only the embedding
// stage can fail the whole run. When nothing passes the question
// filter the result is empty, the embedder is never invoked, and the
// caller decides what "no questions found" should look like.

use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::document::{self, ocr::OcrEngine, DocumentKind};
use crate::filter;
use crate::grouping::embedder::Embedder;
use crate::grouping::greedy;
use crate::models::AnalysisResult;
use crate::segment;
use crate::tally::FrequencyTable;

/// Run one full analysis over a batch of file paths.
///
/// Unsupported extensions are skipped silently; unreadable documents
/// are skipped with a warning. Returns the grouped result, empty when
/// no sentence in the batch passes the question filter.
pub async fn run(
    paths: &[PathBuf],
    ocr: &dyn OcrEngine,
    embedder: &dyn Embedder,
    threshold: f64,
) -> Result<AnalysisResult> {
    let mut table = FrequencyTable::new();

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Reading [{bar:30}] {pos}/{len}")
            .expect("valid template"),
    );

    for path in paths {
        let Some(kind) = DocumentKind::from_path(path) else {
            info!(path = %path.display(), "Unsupported extension, skipping");
            pb.inc(1);
            continue;
        };

        match document::extract(path, kind, ocr).await {
            Ok(text) => {
                // Extracted text carries a hard line break per PDF line
                // and per DOCX paragraph; unfold them so a question
                // wrapped across lines segments as one sentence.
                let text = text.replace('\n', " ");

                let before = table.total();
                for sentence in segment::sentences(&text) {
                    if let Some(question) = filter::filter_question(sentence) {
                        table.record(question);
                    }
                }
                info!(
                    path = %path.display(),
                    questions = table.total() - before,
                    "Document processed"
                );
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Extraction failed, skipping document");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if table.is_empty() {
        return Ok(AnalysisResult::default());
    }

    let distinct = table.distinct().to_vec();
    info!(
        distinct = distinct.len(),
        occurrences = table.total(),
        "Embedding distinct questions"
    );

    let embeddings = embedder.embed_batch(&distinct).await?;
    if embeddings.len() != distinct.len() {
        anyhow::bail!(
            "Embedder returned {} vectors for {} questions",
            embeddings.len(),
            distinct.len()
        );
    }

    Ok(greedy::group_questions(
        &distinct,
        &embeddings,
        &table,
        threshold,
    ))
}
