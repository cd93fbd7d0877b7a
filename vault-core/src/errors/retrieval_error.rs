/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search failed for {source_type}: {reason}")]
    SearchFailed { source_type: String, reason: String },

    #[error("alias lookup failed for entity {entity_id}: {reason}")]
    AliasLookupFailed { entity_id: String, reason: String },
}
