//! Narrator implementations.

mod fallback_narrator;
mod mock_narrator;
mod template_narrator;

pub use fallback_narrator::{FallbackNarrator, NarrationOutcome, NarrationSource};
pub use mock_narrator::{MockNarrator, MockResponse};
pub use template_narrator::TemplateNarrator;
