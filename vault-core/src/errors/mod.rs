//! Error taxonomy for the retrieval engine.
//!
//! Subsystem errors are small `thiserror` enums; `VaultError` unifies them at
//! the workspace boundary. Malformed citation syntax and unresolved citation
//! targets are NOT errors (they degrade to ignored tokens and zero-confidence
//! links respectively); only external-collaborator failures surface here.

mod provenance_error;
mod retrieval_error;

pub use provenance_error::ProvenanceError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the vault workspace.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Provenance(#[from] ProvenanceError),

    /// An external collaborator (search index, generator, store) failed.
    /// Never retried inside the engine; the underlying message is preserved.
    #[error("external dependency '{dependency}' failed: {message}")]
    External { dependency: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl VaultError {
    /// Wrap an external-collaborator failure, keeping its message.
    pub fn external(dependency: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::External {
            dependency: dependency.into(),
            message: source.to_string(),
        }
    }
}

/// Result alias used across all vault crates.
pub type VaultResult<T> = Result<T, VaultError>;
