use serde::{Deserialize, Serialize};

use super::chunk::Chunk;

/// A chunk paired with a relevance score. Produced by the tf-idf ranker, or
/// carried through from the lexical index (rank converted to a score).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub chunk: Chunk,
    pub score: f64,
}

impl ScoredCandidate {
    /// Confidence attributed to a proactive "used as context" provenance
    /// edge for this candidate.
    pub fn used_context_confidence(&self) -> f64 {
        self.score.clamp(0.0, 1.0)
    }
}
