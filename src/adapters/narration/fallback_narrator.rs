//! Fallback Narrator - Runs a primary narrator under a deadline.
//!
//! When the primary narrator times out or fails, the deterministic template
//! narration is returned instead, so narration itself never fails.
//!
//! # Example
//!
//! ```ignore
//! let narrator = FallbackNarrator::new(llm_narrator, Duration::from_secs(20));
//! let outcome = narrator.narrate_with_source(&context).await;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::narrative::{compose_narration, NarrationContext, NarrationSections};
use crate::ports::{NarrationError, Narrator};

/// Which narrator produced the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationSource {
    Primary,
    Template,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationOutcome {
    pub source: NarrationSource,
    pub sections: NarrationSections,
}

/// Narrator wrapper with a timeout and a template fallback.
pub struct FallbackNarrator<P: Narrator> {
    primary: P,
    timeout: Duration,
}

impl<P: Narrator> FallbackNarrator<P> {
    pub fn new(primary: P, timeout: Duration) -> Self {
        Self { primary, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Narrates and reports whether the fallback was used.
    pub async fn narrate_with_source(&self, context: &NarrationContext) -> NarrationOutcome {
        let error = match tokio::time::timeout(self.timeout, self.primary.narrate(context)).await {
            Ok(Ok(sections)) => {
                return NarrationOutcome {
                    source: NarrationSource::Primary,
                    sections,
                }
            }
            Ok(Err(e)) => e,
            Err(_) => NarrationError::timeout(self.timeout.as_secs()),
        };

        tracing::warn!(
            narrator = self.primary.name(),
            error = %error,
            "narration failed, using template fallback"
        );
        NarrationOutcome {
            source: NarrationSource::Template,
            sections: compose_narration(context),
        }
    }
}

#[async_trait]
impl<P: Narrator> Narrator for FallbackNarrator<P> {
    async fn narrate(&self, context: &NarrationContext) -> Result<NarrationSections, NarrationError> {
        Ok(self.narrate_with_source(context).await.sections)
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
