//! Domain layer: the pure inference stages and their value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (scores, ids, timestamps, errors)
//! - `catalog` - Static tables loaded once and shared read-only
//! - `profile` - Answers to preference indicators
//! - `recommendation` - Priority spaces, processes, selection feedback and grade
//! - `axes` - Judgment axes and the intervention level
//! - `intervention` - Choice reduction and irreversibility warnings
//! - `risk` - Current, future and missing risks
//! - `scenario` - Lifestyle scenario matching
//! - `narrative` - Tone, template narration and prompts

pub mod axes;
pub mod catalog;
pub mod foundation;
pub mod intervention;
pub mod narrative;
pub mod profile;
pub mod recommendation;
pub mod risk;
pub mod scenario;
