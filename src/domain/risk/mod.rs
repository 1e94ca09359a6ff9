//! Risk detection: unmet current needs, foreseeable future needs and gaps
//! in the plan itself.

mod detector;
mod types;

pub use detector::{detect_risks, CURRENT_RISK_AT, YOUNG_CHILD_AGE_RANGE};
pub use types::{Risk, RiskLevel, RiskTiming, RiskType};
