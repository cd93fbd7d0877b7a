use crate::errors::VaultResult;
use crate::models::GenerationSettings;

/// External text-generation capability. The engine never retries it;
/// failures become unsuccessful [`crate::models::GenerationRun`]s.
pub trait ITextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        context: &str,
        settings: &GenerationSettings,
    ) -> VaultResult<String>;
}
