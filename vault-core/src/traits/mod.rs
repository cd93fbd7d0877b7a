//! Capability traits at the engine's seams.
//!
//! The engine borrows these as `&dyn` collaborators; the host wires real
//! implementations (full-text index, LLM client, provenance store) and tests
//! wire fakes.

mod aliases;
mod generator;
mod provenance;
mod ranker;
mod search;

pub use aliases::IAliasProvider;
pub use generator::ITextGenerator;
pub use provenance::IProvenanceStore;
pub use ranker::Ranker;
pub use search::{ILexicalSearch, SearchHit};
