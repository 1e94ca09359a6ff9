//! Narrator Port - Interface for turning an analysis into customer-facing prose.
//!
//! A narrator only describes; it never changes the analysis. Implementations
//! range from the deterministic template narrator to a language-model backed
//! one. Callers wrap slow or fallible narrators with a timeout and a template
//! fallback so a narration is always available.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::narrative::{NarrationContext, NarrationSections};

/// Port for narration of a finished analysis.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Produces the six narration sections for one analysis.
    async fn narrate(&self, context: &NarrationContext) -> Result<NarrationSections, NarrationError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Errors from external narrators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrationError {
    /// The narrator did not answer in time.
    #[error("narration timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The narrator could not be reached.
    #[error("narrator unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The narrator answered with something unusable.
    #[error("malformed narration: {0}")]
    Malformed(String),
}

impl NarrationError {
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
