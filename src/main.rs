//! Ingestion pipeline binary
//!
//! Run with: cargo run -- <DATA_DIR>

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resume_ingest::{IngestConfig, IngestPipeline};

/// Ingest resume PDFs and DOCX files into overlapping text chunks
#[derive(Debug, Parser)]
#[command(name = "resume-ingest", version)]
struct Args {
    /// Root directory scanned recursively for *.pdf and *.docx files
    data_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum chunk size in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters shared between adjacent chunks
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Source-path substring that triggers the verification trace
    #[arg(long)]
    trace_marker: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => IngestConfig::from_file(path)?,
        None => IngestConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(size) = args.chunk_size {
        config.chunking.chunk_size = size;
    }
    if let Some(overlap) = args.chunk_overlap {
        config.chunking.chunk_overlap = overlap;
    }
    if let Some(marker) = args.trace_marker {
        config.trace_marker = Some(marker);
    }

    if config.data_dir.as_os_str().is_empty() {
        anyhow::bail!(
            "no data directory given (pass it as an argument or set it in the config file)"
        );
    }
    if !config.data_dir.is_dir() {
        anyhow::bail!("data directory does not exist: {}", config.data_dir.display());
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - Data dir: {}", config.data_dir.display());
    tracing::info!("  - Chunk size: {}", config.chunking.chunk_size);
    tracing::info!("  - Chunk overlap: {}", config.chunking.chunk_overlap);

    let pipeline = IngestPipeline::new(config);
    let chunks = pipeline.run();

    println!("\nIngestion complete: {} chunk(s) produced", chunks.len());

    Ok(())
}
