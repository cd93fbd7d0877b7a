/// Provenance subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ProvenanceError {
    #[error("failed to append evidence link {link_id}: {reason}")]
    AppendFailed { link_id: String, reason: String },

    #[error("quote lookup failed for {source_ref} chunk {chunk_index}: {reason}")]
    QuoteLookupFailed {
        source_ref: String,
        chunk_index: usize,
        reason: String,
    },
}
