use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::source_type::SourceType;

/// A bounded contiguous slice of a longer text; the atomic unit of ranking
/// and citation. Immutable once produced, scoped to one retrieval request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Id of the source record (note/document/snippet/artifact id).
    pub source_id: String,
    pub source_type: SourceType,
    pub title: String,
    pub text: String,
    /// Position within the source document; 0-based, stable across
    /// repeated chunking of identical input.
    pub chunk_index: usize,
    /// Most recent timestamp associated with the source, if known.
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Chunk {
    /// Citation label for this chunk. Snippets cite the whole snippet;
    /// everything else cites source + chunk index.
    pub fn citation_label(&self) -> super::CitationLabel {
        match self.source_type {
            SourceType::Snippet => super::CitationLabel::snippet(&self.source_id),
            st => super::CitationLabel::chunked(st, &self.source_id, self.chunk_index),
        }
    }
}
