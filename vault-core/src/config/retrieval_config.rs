use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking configuration for the explicit-candidate (tf-idf) path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of candidates returned by `rank_explicit`.
    pub take: usize,
    /// Per-content-type result limit requested from the lexical search index.
    pub search_limit: usize,
    /// Whether entity alias expansion is applied to the query token set.
    pub alias_expansion: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            take: defaults::DEFAULT_TAKE,
            search_limit: defaults::DEFAULT_SEARCH_LIMIT,
            alias_expansion: true,
        }
    }
}
