//! Judgment axes - cost sensitivity, risk aversion, decision drag and
//! control need - and the intervention level derived from them.

mod adapters;
mod judgment;

pub use adapters::AxisSource;
pub use judgment::{InterventionLevel, JudgmentAxes};
