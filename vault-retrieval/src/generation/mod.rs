//! Generator invocation over an assembled context pack.

mod run;

pub use run::{build_prompt, run_generation};
