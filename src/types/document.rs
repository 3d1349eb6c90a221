//! Document and chunk types with link metadata and source tracking

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// One unit of extracted content: a single PDF page or a whole DOCX file.
///
/// Link metadata is attached once by the adapter that created the document
/// and is not mutated afterwards. `all_links` always contains the
/// deduplicated union of `text_links` and `native_links`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Extracted plain text
    pub content: String,
    /// Originating file path
    pub source: PathBuf,
    /// Page number (1-indexed, PDFs only)
    pub page: Option<u32>,
    /// Total pages in the source file (PDFs only)
    pub total_pages: Option<u32>,
    /// Links found by pattern matching over `content`
    pub text_links: BTreeSet<String>,
    /// Links found as format-native hyperlink objects (always empty for DOCX)
    pub native_links: BTreeSet<String>,
    /// Union of `text_links` and `native_links`, deduplicated
    pub all_links: BTreeSet<String>,
}

impl Document {
    /// Create a document with no link metadata attached yet
    pub fn new(content: String, source: impl Into<PathBuf>) -> Self {
        Self {
            content,
            source: source.into(),
            page: None,
            total_pages: None,
            text_links: BTreeSet::new(),
            native_links: BTreeSet::new(),
            all_links: BTreeSet::new(),
        }
    }

    /// Set page position within the source file
    pub fn with_page(mut self, page: u32, total_pages: u32) -> Self {
        self.page = Some(page);
        self.total_pages = Some(total_pages);
        self
    }

    /// Attach link metadata, recomputing `all_links` as the union of both sets
    pub fn attach_links(
        &mut self,
        text_links: BTreeSet<String>,
        native_links: BTreeSet<String>,
    ) {
        self.all_links = text_links.union(&native_links).cloned().collect();
        self.text_links = text_links;
        self.native_links = native_links;
    }
}

/// Source metadata propagated from a [`Document`] onto every chunk derived
/// from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkSource {
    /// Originating file path
    pub source: PathBuf,
    /// Page number (PDFs only)
    pub page: Option<u32>,
    /// Total pages in the source file (PDFs only)
    pub total_pages: Option<u32>,
    /// Links found by pattern matching in the parent document
    pub text_links: BTreeSet<String>,
    /// Format-native links attached to the parent document
    pub native_links: BTreeSet<String>,
    /// Deduplicated union of the parent document's link sets
    pub all_links: BTreeSet<String>,
}

impl From<&Document> for ChunkSource {
    fn from(doc: &Document) -> Self {
        Self {
            source: doc.source.clone(),
            page: doc.page,
            total_pages: doc.total_pages,
            text_links: doc.text_links.clone(),
            native_links: doc.native_links.clone(),
            all_links: doc.all_links.clone(),
        }
    }
}

/// A bounded-size slice of a document's text, terminal output of the pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk text, at most the configured chunk size in characters
    pub content: String,
    /// Metadata inherited from the parent document
    pub source: ChunkSource,
    /// Position of this chunk in the pipeline output
    pub index: u32,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(content: String, source: ChunkSource, index: u32) -> Self {
        Self {
            content,
            source,
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_attach_links_unions_both_sets() {
        let mut doc = Document::new("text".to_string(), "cv.pdf");
        doc.attach_links(
            set(&["github.com/kunal", "https://example.com"]),
            set(&["https://example.com", "mailto-less.io/page"]),
        );

        assert_eq!(
            doc.all_links,
            set(&[
                "github.com/kunal",
                "https://example.com",
                "mailto-less.io/page"
            ])
        );
        assert!(doc.all_links.is_superset(&doc.text_links));
        assert!(doc.all_links.is_superset(&doc.native_links));
    }

    #[test]
    fn test_chunk_source_inherits_document_metadata() {
        let mut doc = Document::new("text".to_string(), "cv.pdf").with_page(2, 3);
        doc.attach_links(set(&["linkedin.com/in/kunal"]), BTreeSet::new());

        let source = ChunkSource::from(&doc);
        assert_eq!(source.source, PathBuf::from("cv.pdf"));
        assert_eq!(source.page, Some(2));
        assert_eq!(source.all_links, set(&["linkedin.com/in/kunal"]));
        assert!(source.native_links.is_empty());
    }
}
