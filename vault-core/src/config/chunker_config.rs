use serde::{Deserialize, Serialize};

use super::defaults;

/// Chunker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Target window size in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive windows.
    pub overlap: usize,
    /// Inputs at or below this length become a single chunk; a trailing
    /// window is extended rather than emitted below this length.
    pub min_len: usize,
}

impl ChunkerConfig {
    /// Enforce internal consistency: a window must always advance, and the
    /// minimum length can never exceed the window size.
    pub fn clamped(&self) -> Self {
        let chunk_size = self.chunk_size.max(1);
        Self {
            chunk_size,
            overlap: self.overlap.min(chunk_size.saturating_sub(1)),
            min_len: self.min_len.min(chunk_size),
        }
    }

    /// Window stride; always at least 1 after `clamped()`.
    pub fn stride(&self) -> usize {
        self.chunk_size.saturating_sub(self.overlap).max(1)
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            overlap: defaults::DEFAULT_CHUNK_OVERLAP,
            min_len: defaults::DEFAULT_CHUNK_MIN_LEN,
        }
    }
}
