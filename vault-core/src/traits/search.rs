use chrono::{DateTime, Utc};

use crate::errors::VaultResult;
use crate::models::SourceType;

/// One ranked result from the lexical search oracle.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub text: String,
    /// Index ranking value; lower is more relevant.
    pub rank: f64,
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Inverted-index-backed ranked full-text search. External collaborator;
/// the engine only consumes it.
pub trait ILexicalSearch: Send + Sync {
    /// Search one content type, optionally restricted to a scope
    /// (e.g. a workspace or entity id). Results arrive already ranked.
    fn search(
        &self,
        query: &str,
        source_type: SourceType,
        scope: Option<&str>,
        limit: usize,
    ) -> VaultResult<Vec<SearchHit>>;
}
