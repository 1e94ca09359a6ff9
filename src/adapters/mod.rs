//! Adapters - Implementations of port interfaces.
//!
//! - `narration` - Template, fallback and mock narrators

pub mod narration;

pub use narration::{FallbackNarrator, MockNarrator, NarrationOutcome, NarrationSource, TemplateNarrator};
