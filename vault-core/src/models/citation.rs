use serde::{Deserialize, Serialize};

use super::source_type::SourceType;

/// A citation recovered from generated answer text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Citation {
    /// `[SNIP:<id>]` — cites a whole snippet.
    Snippet { id: String },
    /// `[DOC:<id>|chunk:<N>]` (and NOTE/ART variants) — cites one chunk of
    /// a longer source.
    DocumentLocator {
        source_type: SourceType,
        id: String,
        chunk_index: usize,
    },
}

impl Citation {
    pub fn target_id(&self) -> &str {
        match self {
            Citation::Snippet { id } => id,
            Citation::DocumentLocator { id, .. } => id,
        }
    }
}
