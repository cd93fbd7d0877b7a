//! Data model for one retrieval/generation/provenance cycle.
//!
//! Chunks and scored candidates live only for the duration of a request;
//! evidence links are the single persisted output (append-only, via
//! [`crate::traits::IProvenanceStore`]).

mod candidate;
mod chunk;
mod citation;
mod context;
mod evidence;
mod generation;
mod label;
mod source_type;

pub use candidate::ScoredCandidate;
pub use chunk::Chunk;
pub use citation::Citation;
pub use context::{ContextItem, ContextPack, RetrievalLog};
pub use evidence::{EntityType, EvidenceLink, EvidenceRelation};
pub use generation::{GenerationRun, GenerationSettings};
pub use label::CitationLabel;
pub use source_type::SourceType;
