//! Boundary-aware text chunking with overlap

use unicode_segmentation::UnicodeSegmentation;

use crate::config::ChunkingConfig;
use crate::types::{Chunk, ChunkSource, Document};

/// Splits document text into overlapping chunks.
///
/// Splitting is recursive: paragraph breaks first, then sentence bounds,
/// then words, then a hard character cut as the last resort. Each chunk
/// after the first starts with the previous chunk's tail, snapped to a
/// sentence or word boundary where one exists within the overlap window.
pub struct TextChunker {
    /// Maximum chunk size in characters
    chunk_size: usize,
    /// Overlap between adjacent chunks
    overlap: usize,
}

/// Boundary preference levels, coarsest first; anything past WORD falls
/// back to a hard character cut
const PARAGRAPH: usize = 0;
const SENTENCE: usize = 1;
const WORD: usize = 2;

impl TextChunker {
    /// Create a new chunker
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            overlap: overlap.min(chunk_size.saturating_sub(1)),
        }
    }

    /// Create a chunker from configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Chunk every document in sequence, propagating each document's source
    /// metadata onto all chunks derived from it. Chunk indices are global
    /// across the whole run.
    pub fn split_documents(&self, docs: &[Document]) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for doc in docs {
            let source = ChunkSource::from(doc);
            for text in self.chunk_text(&doc.content) {
                let index = chunks.len() as u32;
                chunks.push(Chunk::new(text, source.clone(), index));
            }
        }

        chunks
    }

    /// Split one text into chunk strings of at most `chunk_size` characters
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        if text.chars().count() <= self.chunk_size {
            return vec![text.to_string()];
        }

        let units = self.split_units(text, PARAGRAPH);
        self.accumulate(units)
    }

    /// Recursively split text into units no longer than `chunk_size`,
    /// preferring the coarsest boundary that still fits.
    fn split_units(&self, text: &str, level: usize) -> Vec<String> {
        if text.chars().count() <= self.chunk_size {
            return vec![text.to_string()];
        }

        let pieces: Vec<String> = match level {
            PARAGRAPH => split_keeping_separator(text, "\n\n"),
            SENTENCE => text.split_sentence_bounds().map(str::to_string).collect(),
            WORD => text.split_word_bounds().map(str::to_string).collect(),
            _ => {
                // Hard cut at character windows
                let chars: Vec<char> = text.chars().collect();
                return chars
                    .chunks(self.chunk_size)
                    .map(|w| w.iter().collect())
                    .collect();
            }
        };

        let mut units = Vec::new();
        for piece in pieces {
            if piece.chars().count() <= self.chunk_size {
                units.push(piece);
            } else {
                units.extend(self.split_units(&piece, level + 1));
            }
        }
        units
    }

    /// Accumulate units into chunks, carrying the overlap tail forward
    fn accumulate(&self, units: Vec<String>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for unit in units {
            let unit_len = unit.chars().count();

            if !current.is_empty() && current_len + unit_len > self.chunk_size {
                chunks.push(current.clone());

                let tail = self.overlap_tail(&current);
                let tail_len = tail.chars().count();
                if tail_len + unit_len <= self.chunk_size {
                    current = tail;
                    current_len = tail_len;
                } else {
                    current.clear();
                    current_len = 0;
                }
            }

            current.push_str(&unit);
            current_len += unit_len;
        }

        // The final chunk always carries at least the last unit; a flush
        // only happens when a new unit arrives and that unit is appended
        // in the same iteration.
        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

    /// Tail of `text` used to seed the next chunk, snapped to a sentence or
    /// word boundary inside the overlap window where possible.
    fn overlap_tail(&self, text: &str) -> String {
        if self.overlap == 0 {
            return String::new();
        }
        let total = text.chars().count();
        if total <= self.overlap {
            return text.to_string();
        }

        let mut start = text
            .char_indices()
            .nth(total - self.overlap)
            .map(|(i, _)| i)
            .unwrap_or(0);
        while start > 0 && !text.is_char_boundary(start) {
            start -= 1;
        }
        let window = &text[start..];

        // Prefer a sentence boundary, then a word boundary, but never snap
        // down to an empty tail
        if let Some(pos) = window.find(". ") {
            if pos + 2 < window.len() {
                return window[pos + 2..].to_string();
            }
        }
        if let Some(pos) = window.find(' ') {
            if pos + 1 < window.len() {
                return window[pos + 1..].to_string();
            }
        }

        window.to_string()
    }
}

/// Split on a separator, keeping the separator attached to the preceding
/// piece so that concatenating the pieces reconstructs the input.
fn split_keeping_separator(text: &str, sep: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(sep) {
        let end = pos + sep.len();
        pieces.push(rest[..end].to_string());
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;
    use std::collections::BTreeSet;

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunker = TextChunker::new(1000, 200);
        let chunks = chunker.chunk_text("A short resume paragraph.");
        assert_eq!(chunks, vec!["A short resume paragraph.".to_string()]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = TextChunker::new(1000, 200);
        assert!(chunker.chunk_text("").is_empty());
    }

    #[test]
    fn test_no_chunk_exceeds_size() {
        let chunker = TextChunker::new(100, 20);
        let text = "Lorem ipsum dolor sit amet. ".repeat(50);
        for chunk in chunker.chunk_text(&text) {
            assert!(chunk.chars().count() <= 100, "oversized chunk: {chunk:?}");
        }
    }

    #[test]
    fn test_consecutive_chunks_share_overlap_context() {
        let chunker = TextChunker::new(100, 30);
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
        let chunks = chunker.chunk_text(&text);
        assert!(chunks.len() > 1);

        for pair in chunks.windows(2) {
            // The next chunk starts with a suffix of the previous chunk
            // (boundary-snapped, so possibly shorter than the full overlap).
            let prev = &pair[0];
            let next = &pair[1];
            let shared = (1..=prev.len())
                .rev()
                .filter(|&n| prev.is_char_boundary(prev.len() - n))
                .find(|&n| next.starts_with(&prev[prev.len() - n..]))
                .unwrap_or(0);
            assert!(shared > 0, "no shared context between {prev:?} and {next:?}");
        }
    }

    #[test]
    fn test_overlap_removed_reconstructs_text() {
        let chunker = TextChunker::new(80, 20);
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliett kilo lima \
                    mike november oscar papa quebec romeo sierra tango uniform victor whiskey \
                    xray yankee zulu";
        let chunks = chunker.chunk_text(text);
        assert!(chunks.len() > 1);

        let mut rebuilt = chunks[0].clone();
        for chunk in &chunks[1..] {
            // Strip the longest shared prefix/suffix (the carried overlap)
            let shared = (0..=chunk.len().min(rebuilt.len()))
                .rev()
                .filter(|&n| {
                    chunk.is_char_boundary(n) && rebuilt.is_char_boundary(rebuilt.len() - n)
                })
                .find(|&n| rebuilt.ends_with(&chunk[..n]))
                .unwrap_or(0);
            rebuilt.push_str(&chunk[shared..]);
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_prefers_paragraph_boundaries() {
        let chunker = TextChunker::new(60, 0);
        let text = format!("{}\n\n{}", "first paragraph here.", "second paragraph here.");
        let chunks = chunker.chunk_text(&text);
        assert_eq!(chunks.len(), 1, "both paragraphs fit one chunk");

        let long = format!("{}\n\n{}", "x".repeat(50), "y".repeat(50));
        let chunks = chunker.chunk_text(&long);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].starts_with('x'));
        assert!(chunks[1].starts_with('y'));
    }

    #[test]
    fn test_hard_cut_on_unbroken_text() {
        let chunker = TextChunker::new(10, 0);
        let text = "a".repeat(35);
        let chunks = chunker.chunk_text(&text);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_split_documents_propagates_metadata() {
        let mut doc = Document::new("word ".repeat(100), "cv.docx");
        let links: BTreeSet<String> = ["github.com/kunal".to_string()].into();
        doc.attach_links(links.clone(), BTreeSet::new());

        let chunker = TextChunker::new(120, 30);
        let chunks = chunker.split_documents(&[doc]);
        assert!(chunks.len() > 1);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i as u32);
            assert_eq!(chunk.source.source, std::path::PathBuf::from("cv.docx"));
            assert_eq!(chunk.source.all_links, links);
        }
    }
}
