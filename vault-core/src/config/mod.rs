//! Engine configuration, loadable from TOML.
//!
//! Each subsystem has its own config struct with serde defaults; ceilings
//! from [`crate::constants`] are applied via `clamped()` before use, so a
//! hostile or typo'd config can never blow past engine-wide maxima.

mod assembly_config;
mod chunker_config;
mod retrieval_config;

pub use assembly_config::AssemblyConfig;
pub use chunker_config::ChunkerConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{VaultError, VaultResult};

/// Top-level configuration for the retrieval engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub chunker: ChunkerConfig,
    pub retrieval: RetrievalConfig,
    pub assembly: AssemblyConfig,
}

impl VaultConfig {
    /// Parse a TOML document into a config, falling back to defaults for
    /// any missing section or field.
    pub fn from_toml(text: &str) -> VaultResult<Self> {
        toml::from_str(text).map_err(|e| VaultError::Config(e.to_string()))
    }

    /// Return a copy with every subsystem clamped to engine ceilings.
    pub fn clamped(&self) -> Self {
        Self {
            chunker: self.chunker.clamped(),
            retrieval: self.retrieval.clone(),
            assembly: self.assembly.clamped(),
        }
    }
}

pub(crate) mod defaults {
    pub const DEFAULT_CHUNK_SIZE: usize = 1200;
    pub const DEFAULT_CHUNK_OVERLAP: usize = 100;
    pub const DEFAULT_CHUNK_MIN_LEN: usize = 800;

    pub const DEFAULT_TAKE: usize = 8;
    pub const DEFAULT_SEARCH_LIMIT: usize = 20;

    pub const DEFAULT_MAX_TOTAL_CHARS: usize = 12_000;
    pub const DEFAULT_LIMIT_PER_TYPE: usize = 5;
}
