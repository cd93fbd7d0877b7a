//! Serialize a context pack into prompt + context text and invoke the
//! external generator. Generator failure is not an engine error: it becomes
//! an unsuccessful run carrying the message, and is never retried here.

use tracing::{info, warn};

use vault_core::models::{ContextPack, GenerationRun, GenerationSettings};
use vault_core::traits::ITextGenerator;

/// Instruction block prepended to the question so answers cite evidence
/// with the labels embedded in the context.
const CITATION_INSTRUCTION: &str =
    "Answer using only the provided context. Cite evidence inline by repeating \
     the bracketed labels exactly as given, e.g. [SNIP:id] or [DOC:id|chunk:2].";

/// Build the prompt handed to the generator for one question.
pub fn build_prompt(question: &str) -> String {
    format!("{CITATION_INSTRUCTION}\n\nQuestion: {question}")
}

/// Invoke the generator with the rendered pack.
pub fn run_generation(
    generator: &dyn ITextGenerator,
    question: &str,
    pack: &ContextPack,
    settings: &GenerationSettings,
) -> GenerationRun {
    let prompt = build_prompt(question);
    let context = pack.render();
    match generator.generate(&prompt, &context, settings) {
        Ok(answer_text) => {
            info!(chars = answer_text.len(), "generation succeeded");
            GenerationRun::succeeded(answer_text)
        }
        Err(e) => {
            warn!(error = %e, "generation failed");
            GenerationRun::failed(e.to_string())
        }
    }
}
