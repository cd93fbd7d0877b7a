use std::fmt;

use serde::{Deserialize, Serialize};

use super::source_type::SourceType;

/// A machine-readable citation label embedded in context packs and expected
/// back in generated text. The rendered form is byte-stable:
/// `[SNIP:<id>]` for snippets, `[<PREFIX>:<id>|chunk:<N>]` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationLabel(String);

impl CitationLabel {
    pub fn snippet(id: &str) -> Self {
        Self(format!("[SNIP:{id}]"))
    }

    pub fn chunked(source_type: SourceType, id: &str, chunk_index: usize) -> Self {
        Self(format!(
            "[{}:{id}|chunk:{chunk_index}]",
            source_type.label_prefix()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CitationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
