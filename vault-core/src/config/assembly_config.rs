use serde::{Deserialize, Serialize};

use crate::constants;

use super::defaults;

/// Context-pack assembly configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Global character budget for a context pack.
    pub max_total_chars: usize,
    /// Maximum items taken per content type before merging.
    pub limit_per_type: usize,
}

impl AssemblyConfig {
    /// Clamp both knobs to the engine-wide ceilings.
    pub fn clamped(&self) -> Self {
        Self {
            max_total_chars: self.max_total_chars.min(constants::MAX_TOTAL_CHARS_CEILING),
            limit_per_type: self.limit_per_type.min(constants::MAX_LIMIT_PER_TYPE),
        }
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            max_total_chars: defaults::DEFAULT_MAX_TOTAL_CHARS,
            limit_per_type: defaults::DEFAULT_LIMIT_PER_TYPE,
        }
    }
}
