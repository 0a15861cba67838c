// System status display — results file, stored groups, model presence.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::config::Config;
use crate::store::ResultStore;

/// Display system status to the terminal.
pub async fn show(config: &Config, store: &dyn ResultStore) -> Result<()> {
    let data_path = Path::new(&config.data_path);
    if !data_path.exists() {
        println!("Results: none saved at {}", config.data_path);
        println!("  Run `foolscap analyze <files>...` to build a report");
    } else {
        let meta = std::fs::metadata(data_path)?;
        let saved_at = meta
            .modified()
            .map(|t| {
                DateTime::<Local>::from(t)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|_| "unknown".to_string());

        println!(
            "Results: {} ({}, saved {})",
            config.data_path,
            format_bytes(meta.len()),
            saved_at
        );

        let result = store.load().await?;
        let variant_count: usize = result.groups.iter().map(|g| g.similar_variants.len()).sum();
        println!(
            "  {} question groups, {} distinct questions, {} occurrences",
            result.len(),
            variant_count,
            result.total_frequency()
        );
    }

    if crate::download::model_files_present(&config.model_dir) {
        println!("Embedding model: present in {}", config.model_dir.display());
    } else {
        println!("Embedding model: not downloaded");
        println!("  Run `foolscap download-model` to fetch it");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
