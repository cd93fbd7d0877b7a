//! # vault-core
//!
//! Foundation crate for the research-vault retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AssemblyConfig, ChunkerConfig, RetrievalConfig, VaultConfig};
pub use errors::{VaultError, VaultResult};
pub use models::{
    Chunk, Citation, CitationLabel, ContextItem, ContextPack, EvidenceLink, EvidenceRelation,
    GenerationRun, GenerationSettings, RetrievalLog, ScoredCandidate, SourceType,
};
