//! resume-ingest: batch ingestion of resume-like documents for retrieval
//! indexing.
//!
//! The pipeline walks a directory tree for PDF and DOCX files, extracts
//! their text and hyperlinks (native PDF link annotations plus URL-like
//! substrings found by pattern matching), and splits the text into
//! overlapping chunks.
//!
//! ```rust,no_run
//! use resume_ingest::{IngestConfig, IngestPipeline};
//!
//! let config = IngestConfig::new("./data");
//! let chunks = IngestPipeline::new(config).run();
//! println!("{} chunks produced", chunks.len());
//! ```

pub mod config;
pub mod error;
pub mod ingestion;
pub mod types;

pub use config::{ChunkingConfig, IngestConfig};
pub use error::{Error, Result};
pub use ingestion::{DocxIngestor, IngestPipeline, LinkScanner, PdfIngestor, TextChunker};
pub use types::{Chunk, ChunkSource, Document};
