//! DOCX adapter: whole-file text extraction with pattern-matched links

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ingestion::links::LinkScanner;
use crate::types::Document;

/// Processes one DOCX file into a single [`Document`] with pattern-matched
/// link metadata.
///
/// Unlike the PDF adapter, this adapter swallows errors: any failure is
/// logged and an empty document sequence is returned, so callers cannot
/// distinguish an empty file from a failed extraction. This asymmetry is
/// intentional and load-bearing for the orchestrator's contract.
pub struct DocxIngestor {
    scanner: LinkScanner,
}

impl DocxIngestor {
    /// Create a new DOCX ingestor
    pub fn new() -> Self {
        Self {
            scanner: LinkScanner::new(),
        }
    }

    /// Process a single DOCX file. Returns one document on success and an
    /// empty sequence on any error. `native_links` is always empty: the DOCX
    /// format has no modeled native-hyperlink extraction here.
    pub fn process_docx(&self, path: &Path) -> Vec<Document> {
        tracing::info!("Processing DOCX: {}", path.display());

        match self.try_process(path) {
            Ok(docs) => docs,
            Err(e) => {
                tracing::error!("Error processing DOCX {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn try_process(&self, path: &Path) -> Result<Vec<Document>> {
        let data = std::fs::read(path).map_err(|e| Error::file_not_readable(path, e))?;
        let docx = docx_rs::read_docx(&data).map_err(|e| Error::extraction(path, e))?;

        let mut content = String::new();
        for child in docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
                for child in paragraph.children {
                    if let docx_rs::ParagraphChild::Run(run) = child {
                        for child in run.children {
                            if let docx_rs::RunChild::Text(text) = child {
                                content.push_str(&text.text);
                            }
                        }
                    }
                }
                content.push('\n');
            }
        }

        let mut doc = Document::new(content, path);
        let text_links = self.scanner.scan(&doc.content);
        doc.attach_links(text_links, BTreeSet::new());

        Ok(vec![doc])
    }
}

impl Default for DocxIngestor {
    fn default() -> Self {
        Self::new()
    }
}
