//! PDF adapter: per-page text extraction plus native hyperlink annotations

use lopdf::{Document as PdfFile, Object};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ingestion::links::LinkScanner;
use crate::types::Document;

/// Processes one PDF file into per-page [`Document`]s with combined link
/// metadata.
///
/// Extraction errors propagate to the caller; a partially-failed PDF never
/// yields a partial page list. The orchestrator logs and skips failed files.
pub struct PdfIngestor {
    scanner: LinkScanner,
}

impl PdfIngestor {
    /// Create a new PDF ingestor
    pub fn new() -> Self {
        Self {
            scanner: LinkScanner::new(),
        }
    }

    /// Process a single PDF into one [`Document`] per page, in page order.
    ///
    /// Document-wide native links attach to the first page's document only;
    /// its `all_links` is the union of those and the first page's text
    /// links. Later pages carry their own text links and an empty native
    /// set.
    pub fn process_pdf(&self, path: &Path) -> Result<Vec<Document>> {
        tracing::info!("Processing PDF: {}", path.display());

        let native_links = self.extract_native_links(path)?;

        let pages =
            pdf_extract::extract_text_by_pages(path).map_err(|e| Error::extraction(path, e))?;
        let total_pages = pages.len() as u32;

        let mut docs = Vec::with_capacity(pages.len());
        for (i, raw) in pages.into_iter().enumerate() {
            let mut doc =
                Document::new(cleanup_text(&raw), path).with_page(i as u32 + 1, total_pages);
            let text_links = self.scanner.scan(&doc.content);
            let native = if i == 0 {
                native_links.clone()
            } else {
                BTreeSet::new()
            };
            doc.attach_links(text_links, native);
            docs.push(doc);
        }

        Ok(docs)
    }

    /// Extract clickable hyperlink annotations, deduplicated across the
    /// whole document. Annotations without a URI action are skipped. The
    /// file handle is scoped to this call and released on every exit path.
    pub fn extract_native_links(&self, path: &Path) -> Result<BTreeSet<String>> {
        let pdf = PdfFile::load(path).map_err(|e| Error::file_not_readable(path, e))?;

        let mut links = BTreeSet::new();
        for (_page_no, page_id) in pdf.get_pages() {
            let Ok(page) = pdf.get_dictionary(page_id) else {
                continue;
            };
            let Ok(annots) = page.get(b"Annots") else {
                continue;
            };
            let Ok(annots) = resolve(&pdf, annots).as_array() else {
                continue;
            };

            for annot in annots {
                let Ok(annot) = resolve(&pdf, annot).as_dict() else {
                    continue;
                };
                let Ok(action) = annot.get(b"A") else {
                    continue;
                };
                let Ok(action) = resolve(&pdf, action).as_dict() else {
                    continue;
                };
                let Ok(uri) = action.get(b"URI") else {
                    continue;
                };
                if let Object::String(bytes, _) = resolve(&pdf, uri) {
                    links.insert(String::from_utf8_lossy(bytes).into_owned());
                }
            }
        }

        Ok(links)
    }
}

impl Default for PdfIngestor {
    fn default() -> Self {
        Self::new()
    }
}

/// Follow an indirect reference to its target object
fn resolve<'a>(pdf: &'a PdfFile, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => pdf.get_object(*id).unwrap_or(obj),
        other => other,
    }
}

/// Strip null bytes and blank lines left behind by PDF text extraction
fn cleanup_text(raw: &str) -> String {
    raw.replace('\0', "")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
