//! Chunk file persistence and run summaries.

use crate::error::{ChunkerError, Result};
use crate::text::Chunk;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write chunks as a pretty-printed JSON array.
///
/// Non-ASCII text is written as-is, never `\u` escaped.
pub fn save_chunks(chunks: &[Chunk], output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| ChunkerError::WriteOutput {
        path: output_path.to_path_buf(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, chunks).map_err(|e| {
        if e.is_io() {
            write_err(e.into())
        } else {
            ChunkerError::Json(e)
        }
    })?;
    writer.write_all(b"\n").map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log::info!("Wrote {} chunks to {}", chunks.len(), output_path.display());
    Ok(())
}

/// Load a chunk file previously written by `save_chunks`.
pub fn load_chunks(path: &Path) -> Result<Vec<Chunk>> {
    let file = File::open(path).map_err(|e| ChunkerError::ReadChunks {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ChunkerError::ParseChunks {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Totals reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSummary {
    pub chunk_count: usize,
    pub total_words: usize,
}

impl ChunkSummary {
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        Self {
            chunk_count: chunks.len(),
            total_words: chunks.iter().map(|c| c.word_count).sum(),
        }
    }

    /// Mean words per chunk, rounded down. Zero when there are no chunks.
    pub fn average_words(&self) -> usize {
        self.total_words.checked_div(self.chunk_count).unwrap_or(0)
    }
}

impl fmt::Display for ChunkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} chunks", self.chunk_count)?;
        writeln!(f, "Total words: {}", self.total_words)?;
        write!(f, "Avg chunk size: {} words", self.average_words())
    }
}

/// Chunk counts per section, in order of first appearance.
pub fn section_counts(chunks: &[Chunk]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for chunk in chunks {
        match counts.iter_mut().find(|(s, _)| *s == chunk.section) {
            Some((_, n)) => *n += 1,
            None => counts.push((chunk.section.as_str(), 1)),
        }
    }
    counts
}
