use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use foolscap::config::{Config, OcrBackend};
use foolscap::document::ocr::{NoopOcr, OcrEngine, TesseractOcr};
use foolscap::grouping::embedder::OnnxEmbedder;

/// Foolscap: question extraction and frequency analysis for academic documents.
///
/// Reads batches of PDF/DOCX papers, pulls out the questions, merges
/// near-duplicates by semantic similarity, and reports how often each
/// question shows up.
#[derive(Parser)]
#[command(name = "foolscap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a batch of documents and save the grouped questions
    Analyze {
        /// PDF or DOCX files to analyze (other extensions are skipped)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Similarity threshold for grouping (overrides config)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Show the saved question report
    Report,

    /// Export the saved report to a file
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output path (defaults to foolscap-questions.<ext>)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Download the sentence embedding model (~90 MB)
    DownloadModel,

    /// Show system status (results file, model presence)
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Txt,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("foolscap=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { files, threshold } => {
            let config = Config::load()?;
            config.require_embedder()?;

            let threshold = threshold.unwrap_or(config.similarity_threshold);
            let ocr = create_ocr(&config);
            let embedder = OnnxEmbedder::load(&config.model_dir)?;

            println!("Analyzing {} file(s)...", files.len());

            let result =
                foolscap::pipeline::analyze::run(&files, ocr.as_ref(), &embedder, threshold)
                    .await?;

            if result.is_empty() {
                println!("{}", "No valid questions found in the uploaded files.".red());
                return Ok(());
            }

            let store = foolscap::store::open(&config.data_path);
            store.save(&result).await?;

            println!("\n{}", "Analysis complete.".bold());
            foolscap::output::terminal::display_summary(&result);
            println!(
                "{}",
                format!("Saved to {}. Run `foolscap report` to view.", config.data_path).dimmed()
            );
        }

        Commands::Report => {
            let config = Config::load()?;
            let store = foolscap::store::open(&config.data_path);

            let result = store.load().await?;
            foolscap::output::terminal::display_results(&result);
        }

        Commands::Export { format, output } => {
            let config = Config::load()?;
            let store = foolscap::store::open(&config.data_path);

            let result = store.load().await?;
            if result.is_empty() {
                println!("No analysis results yet. Run `foolscap analyze <files>...` first.");
                return Ok(());
            }

            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!("foolscap-questions.{}", format.extension()))
            });

            match format {
                ExportFormat::Csv => foolscap::output::export::write_csv(&result, &path)?,
                ExportFormat::Txt => foolscap::output::export::write_txt(&result, &path)?,
                ExportFormat::Json => foolscap::output::export::write_json(&result, &path)?,
            }

            println!(
                "{}",
                format!("Exported {} groups to {}", result.len(), path.display()).bold()
            );
        }

        Commands::DownloadModel => {
            let config = Config::load()?;
            let model_dir = &config.model_dir;

            println!("Downloading embedding model...");
            println!("  Destination: {}", model_dir.display());

            foolscap::download::download_model(model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("You can now run `foolscap analyze <files>...`.");
        }

        Commands::Status => {
            let config = Config::load()?;
            let store = foolscap::store::open(&config.data_path);
            foolscap::status::show(&config, store.as_ref()).await?;
        }
    }

    Ok(())
}

/// Create an OCR engine based on the configured backend.
fn create_ocr(config: &Config) -> Box<dyn OcrEngine> {
    match config.ocr_backend {
        OcrBackend::Tesseract => {
            info!("Using tesseract OCR for image-only PDF pages");
            Box::new(TesseractOcr::new())
        }
        OcrBackend::Off => {
            info!("OCR disabled");
            Box::new(NoopOcr)
        }
    }
}
