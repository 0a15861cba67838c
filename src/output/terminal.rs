// Colored terminal output for analysis reports.
//
// All terminal-specific formatting lives here: the report table, the
// frequency bars, and the post-analysis summary. main.rs delegates to
// these instead of formatting inline.

use colored::Colorize;

use crate::models::AnalysisResult;

/// Width of the frequency bar in the top-questions chart.
const BAR_WIDTH: usize = 30;

/// How many groups the frequency chart shows.
const CHART_TOP_N: usize = 10;

/// Display the full report: ranked table plus frequency chart.
pub fn display_results(result: &AnalysisResult) {
    if result.is_empty() {
        println!("No analysis results yet. Run `foolscap analyze <files>...` first.");
        return;
    }

    let sorted = result.sorted_by_frequency();

    println!(
        "\n{}",
        format!("=== Question Report ({} groups) ===", sorted.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<64} {:>5}  {:>8}",
        "Rank".dimmed(),
        "Question".dimmed(),
        "Freq".dimmed(),
        "Variants".dimmed(),
    );
    println!("  {}", "-".repeat(86).dimmed());

    for (i, group) in sorted.iter().enumerate() {
        println!(
            "  {:>4}. {:<64} {:>5}  {:>8}",
            i + 1,
            super::truncate_chars(&group.question, 60),
            group.frequency,
            group.similar_variants.len(),
        );
    }

    display_frequency_chart(result);
}

/// ASCII bar chart of the most frequent question groups.
pub fn display_frequency_chart(result: &AnalysisResult) {
    let sorted = result.sorted_by_frequency();
    let top: Vec<_> = sorted.iter().take(CHART_TOP_N).collect();

    let Some(max_freq) = top.iter().map(|g| g.frequency).max().filter(|&m| m > 0) else {
        return;
    };

    println!(
        "\n{}",
        format!("=== Top {} Questions by Frequency ===", top.len()).bold()
    );
    println!();

    for group in top {
        let width = ((group.frequency as usize * BAR_WIDTH) / max_freq as usize).max(1);
        println!(
            "  {:<44} {} {}",
            super::truncate_chars(&group.question, 40),
            "=".repeat(width).cyan(),
            group.frequency,
        );
    }
    println!();
}

/// One-look summary printed after an analysis run.
pub fn display_summary(result: &AnalysisResult) {
    let variant_count: usize = result.groups.iter().map(|g| g.similar_variants.len()).sum();
    println!(
        "  {} question groups from {} distinct questions ({} total occurrences)",
        result.len(),
        variant_count,
        result.total_frequency(),
    );

    let merged = variant_count.saturating_sub(result.len());
    if merged > 0 {
        println!("  {} near-duplicate questions merged", merged);
    }
}
