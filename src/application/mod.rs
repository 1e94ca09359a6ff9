//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates the domain stages for one request and hands the
//! result to the narration and estimation collaborators.

pub mod handlers;

pub use handlers::{AnalysisBundle, AnalyzeHouseholdCommand, AnalyzeHouseholdHandler, EstimatorInput};
