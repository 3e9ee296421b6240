use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use shortlist::config::Config;
use shortlist::document::{load_document, Document};
use shortlist::embedding::onnx::SentenceEmbedder;
use shortlist::pipeline::{run_analysis, AnalysisOptions};
use shortlist::report::{csv::write_csv_file, terminal};

/// Shortlist: semantic resume screening.
///
/// Ranks a batch of resumes against a job description by embedding
/// similarity, with an explainable matched/missing skill breakdown.
#[derive(Parser)]
#[command(name = "shortlist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank resumes against a job description
    Analyze {
        /// Path to the job description (plain text or PDF)
        #[arg(long)]
        job: PathBuf,

        /// Resume files to score (PDF or plain text)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// How many candidates to highlight in the summary (default: 3)
        #[arg(long, default_value = "3")]
        top: usize,

        /// Write the full report to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Number of resumes to embed in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Download the ONNX embedding model (~90 MB)
    DownloadModel,

    /// Show the active skill vocabulary
    Vocab,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shortlist=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            job,
            resumes,
            top,
            csv,
            concurrency,
        } => {
            let config = Config::load()?;
            config.require_model()?;
            let vocab = config.load_vocabulary()?;

            let job_doc = load_document(&job)
                .with_context(|| format!("Failed to load job description {}", job.display()))?;

            // Load candidates; a file that can't be read or parsed is
            // reported and skipped, the batch continues.
            let mut candidates: Vec<Document> = Vec::with_capacity(resumes.len());
            for path in &resumes {
                match load_document(path) {
                    Ok(doc) => candidates.push(doc),
                    Err(e) => {
                        warn!(file = %path.display(), error = %e, "Skipping unreadable resume");
                        println!(
                            "  {} {}: {e:#}",
                            "Warning:".yellow(),
                            path.display()
                        );
                    }
                }
            }

            println!(
                "Scoring {} resume(s) against {}...",
                candidates.len(),
                job_doc.id
            );

            let embedder = SentenceEmbedder::load(&config.model_dir)?;
            let opts = AnalysisOptions {
                min_text_chars: config.min_text_chars,
                concurrency,
                ..Default::default()
            };

            let outcome =
                run_analysis(&embedder, &vocab, &job_doc.raw_text, &candidates, &opts).await?;

            terminal::display_warnings(&outcome.warnings);
            terminal::display_summary(&outcome.report, top);
            terminal::display_ranked(&outcome.report);

            if let Some(path) = csv {
                write_csv_file(&outcome.report, &path)?;
                println!("Report written to {}", path.display());
            }
        }

        Commands::DownloadModel => {
            let config = Config::load()?;
            let model_dir = &config.model_dir;

            println!("Downloading the embedding model...");
            println!("  Destination: {}", model_dir.display());

            shortlist::embedding::download::download_model(model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("You can now run `shortlist analyze --job jd.txt resume.pdf ...`");
        }

        Commands::Vocab => {
            let config = Config::load()?;
            let vocab = config.load_vocabulary()?;
            info!(terms = vocab.len(), "Loaded vocabulary");

            match &config.vocab_path {
                Some(path) => println!("Vocabulary ({}):", path.display()),
                None => println!("Vocabulary (built-in default):"),
            }
            for term in vocab.terms() {
                println!("  {term}");
            }
        }
    }

    Ok(())
}
