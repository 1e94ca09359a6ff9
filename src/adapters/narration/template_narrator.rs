//! Narrator that never leaves the process.

use async_trait::async_trait;

use crate::domain::narrative::{compose_narration, NarrationContext, NarrationSections};
use crate::ports::{NarrationError, Narrator};

/// Deterministic narrator built from the analysis alone. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

#[async_trait]
impl Narrator for TemplateNarrator {
    async fn narrate(&self, context: &NarrationContext) -> Result<NarrationSections, NarrationError> {
        Ok(compose_narration(context))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}
