//! Document ingestion: adapters, link scanning, chunking, orchestration

pub mod chunker;
pub mod docx;
pub mod links;
pub mod pdf;
pub mod pipeline;

pub use chunker::TextChunker;
pub use docx::DocxIngestor;
pub use links::LinkScanner;
pub use pdf::PdfIngestor;
pub use pipeline::IngestPipeline;
