//! Intervention and choice reduction.
//!
//! Two reduction mechanisms exist. Axis-driven reduction buckets the
//! judgment axes into an intervention level and applies per-class rules.
//! Choice-variable reduction uses counts aggregated from judgment answers.
//! [`ReductionPath::resolve`] decides which one is in force: choice
//! variables always win when present.

mod choice_variables;
mod classification;
mod engine;
mod option_reducer;
mod process_reducer;
mod reduction_path;
mod warnings;

pub use choice_variables::{ChoiceVariables, OptionCount, PartialChoiceVariables};
pub use classification::ProcessClassification;
pub use engine::{InterventionEngine, InterventionOutcome};
pub use option_reducer::{
    reduce_options, OptionTier, ProcessOption, ReducedChoices, MIN_REDUCIBLE_OPTIONS,
};
pub use process_reducer::{reduce_processes, ReductionSummary, COST_SENSITIVE_AT};
pub use reduction_path::ReductionPath;
pub use warnings::{
    detect_lock, generate_warnings, LockInfo, LockLevel, ProcessWarning, Severity, WarningKind,
    SOFT_LOCK_OVERRIDE_BELOW,
};
