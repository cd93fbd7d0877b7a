//! Sliding-window text chunker.
//!
//! Windows are measured in characters, cut on char boundaries, and emitted
//! lazily in document order. Chunk indices are stable across repeated calls
//! on identical input; citation labels depend on that.

use chrono::{DateTime, Utc};

use vault_core::config::ChunkerConfig;
use vault_core::models::{Chunk, SourceType};

/// Splits long text into overlapping, size-bounded windows.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> Self {
        Self {
            config: config.clamped(),
        }
    }

    /// Lazy window iterator over `text` (trimmed first). Restartable: the
    /// iterator is `Clone` and re-iterating yields identical windows.
    pub fn windows<'a>(&self, text: &'a str) -> ChunkWindows<'a> {
        let trimmed = text.trim();
        ChunkWindows {
            boundaries: char_boundaries(trimmed),
            text: trimmed,
            config: self.config.clone(),
            pos: 0,
            done: trimmed.is_empty(),
        }
    }

    /// Chunk one source record, attaching metadata to every window.
    pub fn chunk_source(
        &self,
        source_id: &str,
        source_type: SourceType,
        title: &str,
        text: &str,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Vec<Chunk> {
        self.windows(text)
            .enumerate()
            .map(|(chunk_index, window)| Chunk {
                source_id: source_id.to_string(),
                source_type,
                title: title.to_string(),
                text: window.to_string(),
                chunk_index,
                occurred_at,
            })
            .collect()
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}

/// Byte offset of every char boundary, including the end of the string.
fn char_boundaries(text: &str) -> Vec<usize> {
    let mut b: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    b.push(text.len());
    b
}

/// Iterator over window slices of one trimmed input.
#[derive(Debug, Clone)]
pub struct ChunkWindows<'a> {
    text: &'a str,
    /// `boundaries[i]` is the byte offset of char `i`; last entry is `len()`.
    boundaries: Vec<usize>,
    config: ChunkerConfig,
    /// Current window start, in chars.
    pos: usize,
    done: bool,
}

impl<'a> ChunkWindows<'a> {
    fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.boundaries[start]..self.boundaries[end]]
    }
}

impl<'a> Iterator for ChunkWindows<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let n = self.char_len();
        let ChunkerConfig {
            chunk_size, min_len, ..
        } = self.config;

        // Short inputs are a single chunk.
        if self.pos == 0 && n <= min_len {
            self.done = true;
            return Some(self.text);
        }

        let remaining = n - self.pos;
        if remaining <= chunk_size {
            // Final window. A remainder shorter than `min_len` is widened
            // backwards to `min_len` instead of emitting a tiny chunk.
            self.done = true;
            let start = if remaining < min_len && n >= min_len {
                n - min_len
            } else {
                self.pos
            };
            return Some(self.slice(start, n));
        }

        let window = self.slice(self.pos, self.pos + chunk_size);
        self.pos += self.config.stride();
        Some(window)
    }
}
