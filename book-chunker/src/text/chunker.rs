//! Section-aware chunking of plain-text books for RAG indexing.

use super::heading::{LineKind, classify};
use super::{Chunk, DEFAULT_SECTION, count_words};
use crate::error::{ChunkerError, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Chunks with fewer words than this are dropped.
pub const MIN_CHUNK_WORDS: usize = 50;

/// A minor heading only starts a new chunk once the open one exceeds this.
const SUBSECTION_SPLIT_WORDS: usize = 150;

/// The open chunk is force-closed once it exceeds this.
const MAX_CHUNK_WORDS: usize = 500;

/// A closed chunk before filtering and numbering.
#[derive(Debug)]
struct RawChunk {
    content: String,
    section: String,
    subsection: String,
    word_count: usize,
}

/// Running state of the single pass over the book.
struct ChunkBuilder {
    section: String,
    subsection: String,
    lines: Vec<String>,
    word_count: usize,
    closed: Vec<RawChunk>,
}

impl ChunkBuilder {
    fn new() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            subsection: String::new(),
            lines: Vec::new(),
            word_count: 0,
            closed: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
        self.word_count += count_words(line);
    }

    /// Close the open buffer. Buffers that trim to nothing are discarded.
    fn close(&mut self, reason: &str) {
        if self.lines.is_empty() {
            return;
        }

        let content = self.lines.join("\n").trim().to_string();
        self.lines.clear();
        if content.is_empty() {
            return;
        }

        debug!(
            "Closing chunk ({}): section={:?} subsection={:?} words={}",
            reason, self.section, self.subsection, self.word_count
        );
        self.closed.push(RawChunk {
            content,
            section: self.section.clone(),
            subsection: self.subsection.clone(),
            word_count: self.word_count,
        });
    }

    /// Start a fresh buffer seeded with a heading line.
    fn restart_with(&mut self, heading: &str) {
        self.lines = vec![heading.to_string()];
        self.word_count = count_words(heading);
    }

    fn feed(&mut self, line: &str) {
        let line = line.trim();

        if line.is_empty() {
            // Keep paragraph breaks, but never open a chunk with one
            if !self.lines.is_empty() {
                self.lines.push(String::new());
            }
            return;
        }

        match classify(line) {
            LineKind::Major => {
                self.close("section");
                self.section = line.to_string();
                self.subsection.clear();
                self.restart_with(line);
            }
            LineKind::Minor if self.word_count > SUBSECTION_SPLIT_WORDS => {
                self.close("subsection");
                self.subsection = line.to_string();
                self.restart_with(line);
            }
            LineKind::Minor => {
                self.push_line(line);
                if self.subsection.is_empty() {
                    self.subsection = line.to_string();
                }
            }
            LineKind::Regular => {
                self.push_line(line);
                if self.word_count > MAX_CHUNK_WORDS {
                    self.close("overflow");
                    self.word_count = 0;
                }
            }
        }
    }

    fn finish(mut self) -> Vec<RawChunk> {
        self.close("end of input");
        self.closed
    }
}

/// Split book text into filtered, numbered chunks.
///
/// # Arguments
/// * `text` - The full book text
/// * `source` - Source name recorded in each chunk's metadata
///
/// # Returns
/// Chunks of at least `MIN_CHUNK_WORDS` words, numbered from 1.
pub fn chunk_text(text: &str, source: &str) -> Vec<Chunk> {
    let text = normalize_newlines(text);
    let mut builder = ChunkBuilder::new();
    for line in text.split('\n') {
        builder.feed(line);
    }
    let raw = builder.finish();
    let total = raw.len();

    let chunks: Vec<Chunk> = raw
        .into_iter()
        .filter(|c| c.word_count >= MIN_CHUNK_WORDS)
        .enumerate()
        .map(|(i, c)| Chunk::new(i + 1, c.content, c.section, c.subsection, c.word_count, source))
        .collect();

    info!(
        "Kept {} of {} chunks (dropped {} under {} words)",
        chunks.len(),
        total,
        total - chunks.len(),
        MIN_CHUNK_WORDS
    );

    chunks
}

/// Treat `\r\n` and lone `\r` as line breaks, like `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a UTF-8 book from disk and chunk it.
pub fn parse_book(path: &Path, source: &str) -> Result<Vec<Chunk>> {
    let text = fs::read_to_string(path).map_err(|e| ChunkerError::ReadInput {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(chunk_text(&text, source))
}
