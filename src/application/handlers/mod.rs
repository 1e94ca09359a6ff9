//! Command handlers.

mod analyze_household;

pub use analyze_household::{
    AnalysisBundle, AnalyzeHouseholdCommand, AnalyzeHouseholdHandler, EstimatorInput,
};
