//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the renovation analysis domain.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::ValidationError;
pub use ids::AnalysisId;
pub use score::{Score, ScoreLevel};
pub use timestamp::Timestamp;
