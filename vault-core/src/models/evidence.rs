use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entity kinds that evidence links connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Artifact,
    Snippet,
    Document,
    Note,
    AgentRun,
    Chunk,
}

/// Typed relation payload; serialized as a tagged JSON object so the kind
/// survives round-trips through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvidenceRelation {
    /// Explicit `[SNIP:..]` citation.
    Snippet,
    /// Explicit chunk-level citation; `quote` is the resolved chunk text,
    /// or `None` when the target could not be located.
    DocumentLocator {
        locator: String,
        quote: Option<String>,
    },
    /// Proactive "this candidate was supplied to the generator" edge.
    UsedContext,
}

/// Append-only provenance edge. Never mutated, only created; re-running the
/// linker for the same artifact creates new edges (callers enforce
/// at-most-once invocation per generated answer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceLink {
    pub id: String,
    pub from_entity_type: EntityType,
    pub from_entity_id: String,
    pub to_entity_type: EntityType,
    pub to_entity_id: String,
    pub relation: EvidenceRelation,
    /// `None` for explicit citations (human/LLM-asserted); a ranking-derived
    /// value in [0, 1] for `UsedContext` edges; 0.0 for unresolved targets.
    pub confidence: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl EvidenceLink {
    pub fn new(
        from: (EntityType, &str),
        to: (EntityType, &str),
        relation: EvidenceRelation,
        confidence: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            from_entity_type: from.0,
            from_entity_id: from.1.to_string(),
            to_entity_type: to.0,
            to_entity_id: to.1.to_string(),
            relation,
            confidence,
            created_at: Utc::now(),
        }
    }
}
