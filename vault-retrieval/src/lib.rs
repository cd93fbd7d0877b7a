//! # vault-retrieval
//!
//! The retrieval half of the evidence engine: chunking, relevance ranking,
//! and deterministic context-pack assembly.
//!
//! Two ranking paths share one [`vault_core::traits::Ranker`] seam:
//! open-domain queries delegate to the lexical index ([`ranking::IndexRanker`]),
//! explicit candidate sets go through the hand-rolled tf-idf scorer
//! ([`ranking::TfIdfRanker`]). Both feed the [`assembler::ContextAssembler`].

pub mod assembler;
pub mod chunker;
pub mod engine;
pub mod expansion;
pub mod generation;
pub mod ranking;

pub use assembler::{ContextAssembler, RankedChunk};
pub use chunker::Chunker;
pub use engine::RetrievalEngine;
