//! Text processing for RAG indexing: line classification and chunking.

pub mod chunker;
mod heading;

use serde::{Deserialize, Serialize};

pub use chunker::parse_book;

/// Section label used until the first major heading is seen.
pub const DEFAULT_SECTION: &str = "Introduction";

/// Source name attached to every chunk's metadata by default.
pub const DEFAULT_SOURCE: &str = "The Domo Dating Playbook";

/// A chunk of the book ready for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The accumulated lines, joined with newlines and trimmed
    pub content: String,
    /// The most recent major heading
    pub section: String,
    /// The most recent minor heading within the section (empty if none)
    pub subsection: String,
    /// Words accumulated into this chunk when it was closed
    pub word_count: usize,
    /// 1-based position in the filtered chunk list
    pub chunk_id: usize,
    /// Denormalized labels for the vector store
    pub metadata: ChunkMetadata,
}

/// Metadata mirrored from the chunk's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub section: String,
    pub subsection: String,
    pub chunk_id: usize,
    pub source: String,
}

impl Chunk {
    /// Create a chunk with its metadata derived from the given labels.
    pub fn new(
        chunk_id: usize,
        content: String,
        section: String,
        subsection: String,
        word_count: usize,
        source: &str,
    ) -> Self {
        let metadata = ChunkMetadata {
            section: section.clone(),
            subsection: subsection.clone(),
            chunk_id,
            source: source.to_string(),
        };
        Self {
            content,
            section,
            subsection,
            word_count,
            chunk_id,
            metadata,
        }
    }
}

/// Count whitespace-separated tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_creation() {
        let chunk = Chunk::new(
            3,
            "Hello world".to_string(),
            "PART 1: Start".to_string(),
            "Why now?".to_string(),
            2,
            DEFAULT_SOURCE,
        );
        assert_eq!(chunk.chunk_id, 3);
        assert_eq!(chunk.metadata.chunk_id, 3);
        assert_eq!(chunk.metadata.section, "PART 1: Start");
        assert_eq!(chunk.metadata.subsection, "Why now?");
        assert_eq!(chunk.metadata.source, "The Domo Dating Playbook");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("one  two\tthree\n four"), 4);
    }

    #[test]
    fn test_serialized_field_order() {
        let chunk = Chunk::new(
            1,
            "text".to_string(),
            DEFAULT_SECTION.to_string(),
            String::new(),
            1,
            DEFAULT_SOURCE,
        );
        let json = serde_json::to_string(&chunk).unwrap();
        let content = json.find("\"content\"").unwrap();
        let section = json.find("\"section\"").unwrap();
        let word_count = json.find("\"word_count\"").unwrap();
        let metadata = json.find("\"metadata\"").unwrap();
        assert!(content < section && section < word_count && word_count < metadata);
    }
}
