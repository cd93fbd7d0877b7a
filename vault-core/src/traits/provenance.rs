use crate::errors::VaultResult;
use crate::models::{EvidenceLink, SourceType};

/// Append-only provenance log plus chunk-text lookup. The store's own
/// isolation guarantees cover concurrent access; the engine does no locking.
pub trait IProvenanceStore: Send + Sync {
    /// Persist one evidence link. Append-only; links are never updated.
    fn append(&self, link: &EvidenceLink) -> VaultResult<()>;

    /// Resolve the literal text of a chunk, re-chunking the stored source if
    /// needed. Fallback used when a cited chunk was not part of the
    /// candidate set; `Ok(None)` when the target does not exist.
    fn chunk_text(
        &self,
        source_type: SourceType,
        id: &str,
        chunk_index: usize,
    ) -> VaultResult<Option<String>>;
}
