//! Batch orchestrator: discovery, per-file isolation, aggregation, chunking

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::IngestConfig;
use crate::ingestion::chunker::TextChunker;
use crate::ingestion::docx::DocxIngestor;
use crate::ingestion::pdf::PdfIngestor;
use crate::types::{Chunk, Document};

/// Drives the end-to-end batch run: discover files under the configured
/// root, invoke the matching adapter per file, aggregate all documents, and
/// split them into overlapping chunks.
///
/// Execution is fully sequential; each file is opened, processed and closed
/// before the next begins. A failed file is logged and skipped, so the run
/// always completes and returns whatever chunks it could produce.
pub struct IngestPipeline {
    config: IngestConfig,
    pdf: PdfIngestor,
    docx: DocxIngestor,
    chunker: TextChunker,
}

impl IngestPipeline {
    /// Create a pipeline for the given configuration
    pub fn new(config: IngestConfig) -> Self {
        let chunker = TextChunker::from_config(&config.chunking);
        Self {
            config,
            pdf: PdfIngestor::new(),
            docx: DocxIngestor::new(),
            chunker,
        }
    }

    /// Run the full pipeline and return the final chunk sequence.
    ///
    /// An empty input directory is a valid, non-error terminal state: the
    /// run completes and returns an empty sequence.
    pub fn run(&self) -> Vec<Chunk> {
        let root = &self.config.data_dir;
        tracing::info!("Starting ingestion pipeline from: {}", root.display());

        let documents = self.load_documents(root);
        tracing::info!("Total documents loaded: {}", documents.len());

        let chunks = self.chunker.split_documents(&documents);
        tracing::info!("Total splits created: {}", chunks.len());

        self.verification_trace(&documents);

        chunks
    }

    /// Process all PDFs, then all DOCX files, preserving discovery order
    fn load_documents(&self, root: &Path) -> Vec<Document> {
        let mut documents = Vec::new();

        for path in discover(root, "pdf") {
            match self.pdf.process_pdf(&path) {
                Ok(docs) => documents.extend(docs),
                // Skip the whole file: a partially-failed PDF contributes
                // no pages to the aggregate.
                Err(e) => tracing::error!("Error processing PDF {}: {}", path.display(), e),
            }
        }

        for path in discover(root, "docx") {
            // The DOCX adapter swallows its own errors and returns an
            // empty sequence for a failed file.
            documents.extend(self.docx.process_docx(&path));
        }

        documents
    }

    /// Diagnostic only: report link metadata for the first document whose
    /// source path contains the configured marker substring.
    fn verification_trace(&self, documents: &[Document]) {
        let Some(marker) = &self.config.trace_marker else {
            return;
        };
        if let Some(doc) = documents
            .iter()
            .find(|d| d.source.to_string_lossy().contains(marker.as_str()))
        {
            tracing::info!("Verification trace: {}", doc.source.display());
            tracing::info!("  Extracted links: {:?}", doc.all_links);
        }
    }
}

/// Recursively discover files with the given extension under `root`.
///
/// Extension matching is case-insensitive (`*.pdf` also matches `*.PDF`);
/// paths are sorted for a deterministic processing order.
fn discover(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    paths
}
