use std::fmt;

use serde::{Deserialize, Serialize};

/// The four kinds of citable content in the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// User-authored note.
    Note,
    /// Imported document (chunked).
    Document,
    /// User-highlighted snippet; already short, never chunked.
    Snippet,
    /// A prior generation output.
    Artifact,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [
        SourceType::Note,
        SourceType::Document,
        SourceType::Snippet,
        SourceType::Artifact,
    ];

    /// Citation label prefix; byte-stable, round-trips through the parser.
    pub fn label_prefix(self) -> &'static str {
        match self {
            SourceType::Note => "NOTE",
            SourceType::Document => "DOC",
            SourceType::Snippet => "SNIP",
            SourceType::Artifact => "ART",
        }
    }

    /// Inverse of [`label_prefix`](Self::label_prefix).
    pub fn from_label_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "NOTE" => Some(SourceType::Note),
            "DOC" => Some(SourceType::Document),
            "SNIP" => Some(SourceType::Snippet),
            "ART" => Some(SourceType::Artifact),
            _ => None,
        }
    }

    /// Merge-order stratum when ranks tie: note < document < snippet < artifact.
    pub fn type_order(self) -> u8 {
        match self {
            SourceType::Note => 0,
            SourceType::Document => 1,
            SourceType::Snippet => 2,
            SourceType::Artifact => 3,
        }
    }

    /// Whether content of this type goes through the chunker before assembly.
    pub fn is_chunked(self) -> bool {
        !matches!(self, SourceType::Snippet)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceType::Note => "note",
            SourceType::Document => "document",
            SourceType::Snippet => "snippet",
            SourceType::Artifact => "artifact",
        };
        write!(f, "{s}")
    }
}
