use serde::{Deserialize, Serialize};

/// Opaque-to-the-engine generator settings, passed through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<usize>,
}

/// Outcome of invoking the external text generator. Generator failures are
/// carried here as an unsuccessful run with the error message as the answer
/// text, never propagated as an error across the component boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRun {
    pub success: bool,
    pub answer_text: String,
}

impl GenerationRun {
    pub fn succeeded(answer_text: String) -> Self {
        Self {
            success: true,
            answer_text,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            answer_text: message,
        }
    }
}
