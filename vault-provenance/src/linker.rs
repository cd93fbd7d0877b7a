//! EvidenceLinker: persisted provenance edges for one generated answer.
//!
//! Two families of edge:
//! - explicit citations parsed from the answer (confidence `None`, or 0.0
//!   when the target cannot be resolved — unresolved is still recorded);
//! - proactive `used_context` edges for every candidate supplied to the
//!   generator, so audit queries have an answer even when the generated
//!   text cites nothing.
//!
//! Linking is deliberately not idempotent: every invocation appends fresh
//! edges. At-most-once invocation per answer is the caller's contract.

use tracing::{debug, info};

use vault_core::errors::{ProvenanceError, VaultResult};
use vault_core::models::{
    Citation, EntityType, EvidenceLink, EvidenceRelation, ScoredCandidate, SourceType,
};
use vault_core::traits::IProvenanceStore;

use crate::parser;

pub struct EvidenceLinker<'a> {
    store: &'a dyn IProvenanceStore,
}

impl<'a> EvidenceLinker<'a> {
    pub fn new(store: &'a dyn IProvenanceStore) -> Self {
        Self { store }
    }

    /// Parse `answer_text` and append one evidence link per citation found.
    ///
    /// Returns the total citation count (snippets + document locators);
    /// `count > 0` is the caller's "grounded" signal.
    pub fn link_citations(
        &self,
        answer_text: &str,
        artifact_id: &str,
        candidates_used: &[ScoredCandidate],
    ) -> VaultResult<usize> {
        let parsed = parser::parse_citations(answer_text);

        for citation in &parsed.citations {
            let link = match citation {
                Citation::Snippet { id } => EvidenceLink::new(
                    (EntityType::Artifact, artifact_id),
                    (EntityType::Snippet, id),
                    EvidenceRelation::Snippet,
                    None,
                ),
                Citation::DocumentLocator {
                    source_type,
                    id,
                    chunk_index,
                } => {
                    let quote = self.resolve_quote(*source_type, id, *chunk_index, candidates_used)?;
                    // An unresolved target still gets an edge, at zero
                    // confidence, so the citation is never silently lost.
                    let confidence = if quote.is_none() { Some(0.0) } else { None };
                    EvidenceLink::new(
                        (EntityType::Artifact, artifact_id),
                        (entity_type_for(*source_type), id),
                        EvidenceRelation::DocumentLocator {
                            locator: format!("chunk:{chunk_index}"),
                            quote,
                        },
                        confidence,
                    )
                }
            };
            self.append(&link)?;
        }

        info!(
            artifact_id,
            citations = parsed.len(),
            grounded = !parsed.is_empty(),
            "linked citations"
        );
        Ok(parsed.len())
    }

    /// Ranking path only: append one `used_context` edge per candidate
    /// actually supplied to the generator, confidence `min(1, score)`.
    pub fn record_used_context(
        &self,
        agent_run_id: &str,
        candidates: &[ScoredCandidate],
    ) -> VaultResult<usize> {
        for candidate in candidates {
            let link = EvidenceLink::new(
                (EntityType::AgentRun, agent_run_id),
                (EntityType::Chunk, candidate.chunk.citation_label().as_str()),
                EvidenceRelation::UsedContext,
                Some(candidate.used_context_confidence()),
            );
            self.append(&link)?;
        }
        debug!(
            agent_run_id,
            edges = candidates.len(),
            "recorded used-context provenance"
        );
        Ok(candidates.len())
    }

    fn append(&self, link: &EvidenceLink) -> VaultResult<()> {
        self.store
            .append(link)
            .map_err(|e| ProvenanceError::AppendFailed {
                link_id: link.id.clone(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Literal chunk text for a cited locator: the candidate set first, the
    /// store's lookup as fallback.
    fn resolve_quote(
        &self,
        source_type: SourceType,
        id: &str,
        chunk_index: usize,
        candidates_used: &[ScoredCandidate],
    ) -> VaultResult<Option<String>> {
        let from_candidates = candidates_used.iter().find(|c| {
            c.chunk.source_type == source_type
                && c.chunk.chunk_index == chunk_index
                && c.chunk.source_id.eq_ignore_ascii_case(id)
        });
        if let Some(candidate) = from_candidates {
            return Ok(Some(candidate.chunk.text.clone()));
        }
        self.store
            .chunk_text(source_type, id, chunk_index)
            .map_err(|e| ProvenanceError::QuoteLookupFailed {
                source_ref: id.to_string(),
                chunk_index,
                reason: e.to_string(),
            })
            .map_err(Into::into)
    }
}

fn entity_type_for(source_type: SourceType) -> EntityType {
    match source_type {
        SourceType::Note => EntityType::Note,
        SourceType::Document => EntityType::Document,
        SourceType::Snippet => EntityType::Snippet,
        SourceType::Artifact => EntityType::Artifact,
    }
}
