//! Mock Narrator for testing.
//!
//! Provides a configurable implementation of the Narrator port so tests can
//! exercise fallback handling without a language model.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection
//! - Prompt recording for verification
//!
//! # Example
//!
//! ```ignore
//! let narrator = MockNarrator::new()
//!     .with_response("Hello.\n\nYou value storage.")
//!     .with_delay(Duration::from_millis(100));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::narrative::{build_prompt, NarrationContext, NarrationPrompt, NarrationSections};
use crate::ports::{NarrationError, Narrator};

const DEFAULT_RESPONSE: &str = "Mock narration.";

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Raw model text, split into sections on blank lines.
    Text(String),
    Error(NarrationError),
}

/// Mock narrator for testing.
#[derive(Debug, Clone, Default)]
pub struct MockNarrator {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    delay: Duration,
    prompts: Arc<Mutex<Vec<NarrationPrompt>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text response to the queue.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Text(text.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: NarrationError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts that would have been sent to a language model.
    pub fn prompts(&self) -> Vec<NarrationPrompt> {
        lock(&self.prompts).clone()
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Text(DEFAULT_RESPONSE.to_string()))
    }
}

#[async_trait]
impl Narrator for MockNarrator {
    async fn narrate(&self, context: &NarrationContext) -> Result<NarrationSections, NarrationError> {
        lock(&self.prompts).push(build_prompt(context));

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Text(text) => NarrationSections::from_paragraphs(&text)
                .ok_or_else(|| NarrationError::malformed("empty narration")),
            MockResponse::Error(e) => Err(e),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
