//! Narration inputs and the deterministic parts of narration: tone
//! selection, the template narration and the language-model prompt.

mod context;
mod prompt;
mod sections;
mod template;
mod tone;

pub use context::NarrationContext;
pub use prompt::{build_prompt, NarrationPrompt};
pub use sections::{NarrationSections, DEFAULT_CONCLUSION, DEFAULT_SUMMARY};
pub use template::compose_narration;
pub use tone::Tone;
