//! RetrievalEngine: the engine's two entry points over borrowed collaborators.
//!
//! `build_context` runs the open-domain path (lexical index → chunker →
//! assembler); `rank_explicit` runs the hand-rolled tf-idf path over a
//! caller-supplied candidate set. Both are pure functions of their inputs
//! plus the collaborators' answers; re-running a request is safe.

use tracing::{debug, info};

use vault_core::config::VaultConfig;
use vault_core::errors::{RetrievalError, VaultResult};
use vault_core::models::{Chunk, ContextPack, ScoredCandidate, SourceType};
use vault_core::traits::{IAliasProvider, ILexicalSearch, Ranker};

use crate::assembler::{ContextAssembler, RankedChunk};
use crate::chunker::Chunker;
use crate::ranking::TfIdfRanker;

pub struct RetrievalEngine<'a> {
    search: &'a dyn ILexicalSearch,
    aliases: Option<&'a dyn IAliasProvider>,
    chunker: Chunker,
    assembler: ContextAssembler,
    config: VaultConfig,
    /// Optional scope filter (workspace or entity id) passed to the index.
    scope: Option<String>,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(search: &'a dyn ILexicalSearch, config: VaultConfig) -> Self {
        let config = config.clamped();
        Self {
            search,
            aliases: None,
            chunker: Chunker::new(config.chunker.clone()),
            assembler: ContextAssembler::new(config.assembly.clone()),
            config,
            scope: None,
        }
    }

    /// Attach an alias provider for entity-scoped query expansion.
    pub fn with_alias_provider(mut self, provider: &'a dyn IAliasProvider) -> Self {
        self.aliases = Some(provider);
        self
    }

    /// Restrict index searches to a scope (workspace or entity id).
    pub fn with_scope(mut self, scope: Option<String>) -> Self {
        self.scope = scope;
        self
    }

    /// Open-domain path: query every content type through the lexical
    /// index, chunk long hits, and assemble one budget-bounded pack.
    ///
    /// An empty query or a zeroed budget short-circuits to an empty pack;
    /// neither is an error.
    pub fn build_context(&self, query: &str) -> VaultResult<ContextPack> {
        let query = query.trim();
        if query.is_empty()
            || self.config.assembly.max_total_chars == 0
            || self.config.assembly.limit_per_type == 0
        {
            debug!("empty query or zero budget, returning empty pack");
            return Ok(ContextPack::default());
        }

        let mut streams: Vec<(SourceType, Vec<RankedChunk>)> = Vec::with_capacity(4);
        for source_type in SourceType::ALL {
            let hits = self
                .search
                .search(
                    query,
                    source_type,
                    self.scope.as_deref(),
                    self.config.retrieval.search_limit,
                )
                .map_err(|e| RetrievalError::SearchFailed {
                    source_type: source_type.to_string(),
                    reason: e.to_string(),
                })?;
            debug!(%source_type, hits = hits.len(), "lexical search");

            let mut stream: Vec<RankedChunk> = Vec::new();
            for hit in hits {
                if source_type.is_chunked() {
                    // Every chunk of a hit inherits the hit's index rank.
                    for chunk in self.chunker.chunk_source(
                        &hit.id,
                        source_type,
                        &hit.title,
                        &hit.text,
                        hit.occurred_at,
                    ) {
                        stream.push(RankedChunk {
                            chunk,
                            rank: hit.rank,
                        });
                    }
                } else {
                    stream.push(RankedChunk {
                        chunk: Chunk {
                            source_id: hit.id,
                            source_type,
                            title: hit.title,
                            text: hit.text.trim().to_string(),
                            chunk_index: 0,
                            occurred_at: hit.occurred_at,
                        },
                        rank: hit.rank,
                    });
                }
            }
            streams.push((source_type, stream));
        }

        let pack = self.assembler.assemble(streams);
        info!(
            items = pack.items.len(),
            chars = pack.log.total_chars,
            "context pack built"
        );
        Ok(pack)
    }

    /// Explicit-candidate path: rank a caller-supplied chunk set with the
    /// hand-rolled tf-idf scorer, expanding the query with entity aliases
    /// when a scope id and provider are available.
    pub fn rank_explicit(
        &self,
        query: &str,
        entity_scope: Option<&str>,
        candidates: &[Chunk],
        take: usize,
    ) -> VaultResult<Vec<ScoredCandidate>> {
        let ranker = match (self.aliases, self.config.retrieval.alias_expansion) {
            (Some(provider), true) => {
                TfIdfRanker::new(candidates).with_aliases(provider, entity_scope)
            }
            _ => TfIdfRanker::new(candidates),
        };
        ranker.rank(query, take)
    }

    /// Assemble ranked explicit candidates into a pack (single stream per
    /// type, scores adapted to rank convention).
    pub fn assemble_candidates(&self, candidates: Vec<ScoredCandidate>) -> ContextPack {
        let mut streams: Vec<(SourceType, Vec<RankedChunk>)> = SourceType::ALL
            .into_iter()
            .map(|t| (t, Vec::new()))
            .collect();
        for candidate in candidates {
            let ranked = RankedChunk::from_scored(candidate);
            if let Some(stream) = streams
                .iter_mut()
                .find(|(t, _)| *t == ranked.chunk.source_type)
            {
                stream.1.push(ranked);
            }
        }
        self.assembler.assemble(streams)
    }
}
