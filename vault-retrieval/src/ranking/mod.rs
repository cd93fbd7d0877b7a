//! Relevance ranking: tokenize → score → demote duplicates → take.

pub mod dedup;
pub mod scorer;
pub mod tokenizer;

use std::collections::BTreeSet;

use tracing::debug;

use vault_core::errors::{RetrievalError, VaultResult};
use vault_core::models::{Chunk, ScoredCandidate, SourceType};
use vault_core::traits::{IAliasProvider, ILexicalSearch, Ranker};

/// Rank an explicit candidate set against a prepared token set.
///
/// Empty candidates yield nothing; an empty token set over a non-empty
/// candidate set returns chunks in document order, capped at `take`.
pub fn rank_candidates(
    candidates: &[Chunk],
    tokens: &BTreeSet<String>,
    take: usize,
) -> Vec<ScoredCandidate> {
    if candidates.is_empty() || take == 0 {
        return Vec::new();
    }

    if tokens.is_empty() {
        let mut passthrough: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|chunk| ScoredCandidate {
                chunk: chunk.clone(),
                score: 0.0,
            })
            .collect();
        passthrough.sort_by(|a, b| {
            a.chunk
                .chunk_index
                .cmp(&b.chunk.chunk_index)
                .then_with(|| a.chunk.source_id.cmp(&b.chunk.source_id))
        });
        passthrough.truncate(take);
        return passthrough;
    }

    let scored = scorer::score(candidates, tokens);
    let mut deduped = dedup::demote_duplicates(scored);
    deduped.truncate(take);

    debug!(
        candidates = candidates.len(),
        tokens = tokens.len(),
        returned = deduped.len(),
        "ranked explicit candidate set"
    );
    deduped
}

/// Hand-rolled tf-idf ranking over a fixed candidate set, with optional
/// entity-alias expansion of the query token set.
pub struct TfIdfRanker<'a> {
    candidates: &'a [Chunk],
    aliases: Option<&'a dyn IAliasProvider>,
    entity_scope: Option<&'a str>,
}

impl<'a> TfIdfRanker<'a> {
    pub fn new(candidates: &'a [Chunk]) -> Self {
        Self {
            candidates,
            aliases: None,
            entity_scope: None,
        }
    }

    pub fn with_aliases(
        mut self,
        provider: &'a dyn IAliasProvider,
        entity_scope: Option<&'a str>,
    ) -> Self {
        self.aliases = Some(provider);
        self.entity_scope = entity_scope;
        self
    }
}

impl Ranker for TfIdfRanker<'_> {
    fn rank(&self, query: &str, take: usize) -> VaultResult<Vec<ScoredCandidate>> {
        let mut tokens = tokenizer::token_set(query);
        if let (Some(provider), Some(entity_id)) = (self.aliases, self.entity_scope) {
            crate::expansion::expand_with_aliases(&mut tokens, provider, entity_id)?;
        }
        Ok(rank_candidates(self.candidates, &tokens, take))
    }
}

/// Index-delegated ranking: the lexical search oracle already ordered the
/// hits; its rank is folded into a monotone score so both paths speak
/// [`ScoredCandidate`].
pub struct IndexRanker<'a> {
    search: &'a dyn ILexicalSearch,
    source_type: SourceType,
    scope: Option<&'a str>,
}

impl<'a> IndexRanker<'a> {
    pub fn new(
        search: &'a dyn ILexicalSearch,
        source_type: SourceType,
        scope: Option<&'a str>,
    ) -> Self {
        Self {
            search,
            source_type,
            scope,
        }
    }
}

impl Ranker for IndexRanker<'_> {
    fn rank(&self, query: &str, take: usize) -> VaultResult<Vec<ScoredCandidate>> {
        let hits = self
            .search
            .search(query, self.source_type, self.scope, take)
            .map_err(|e| RetrievalError::SearchFailed {
                source_type: self.source_type.to_string(),
                reason: e.to_string(),
            })?;
        Ok(hits
            .into_iter()
            .map(|hit| ScoredCandidate {
                score: index_rank_to_score(hit.rank),
                chunk: Chunk {
                    source_id: hit.id,
                    source_type: self.source_type,
                    title: hit.title,
                    text: hit.text,
                    chunk_index: 0,
                    occurred_at: hit.occurred_at,
                },
            })
            .collect())
    }
}

/// Map an index rank (lower = better) onto a (0, 1] score (higher = better).
pub fn index_rank_to_score(rank: f64) -> f64 {
    1.0 / (1.0 + rank.max(0.0))
}
