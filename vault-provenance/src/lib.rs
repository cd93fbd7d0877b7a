//! # vault-provenance
//!
//! The provenance half of the evidence engine: recover citation labels from
//! free-form generated text and turn them into append-only evidence links.
//!
//! Parsing is tolerant (malformed labels are ignored, never an error);
//! linking is strict about auditability (unresolved targets still get a
//! zero-confidence link rather than disappearing).

pub mod linker;
pub mod parser;

pub use linker::EvidenceLinker;
pub use parser::{parse_citations, ParsedCitations};
