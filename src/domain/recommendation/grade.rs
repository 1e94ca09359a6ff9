//! Finish grade recommendation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ScoreLevel;
use crate::domain::profile::PreferenceIndicatorVector;

/// Finish grade passed to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Basic,
    Standard,
    Enhanced,
    Premium,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::Basic => "basic",
            Grade::Standard => "standard",
            Grade::Enhanced => "enhanced",
            Grade::Premium => "premium",
        };
        write!(f, "{}", s)
    }
}

/// Budget bracket declared by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Low,
    Medium,
    High,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    Low,
    Mid,
    High,
}

/// Grade decision table.
///
/// - low bracket: more than 5 essentials → standard, else basic
/// - high bracket: high style or high resale concern → premium, else enhanced
/// - otherwise: more than 7 essentials or high style → enhanced, else standard
pub fn recommend_grade(
    indicators: &PreferenceIndicatorVector,
    essential_count: usize,
    declared: Option<BudgetRange>,
) -> Grade {
    let style_high = indicators.style_attachment.level() == ScoreLevel::High;
    let value_high = indicators.home_value_consciousness.level() == ScoreLevel::High;

    match bracket(indicators, declared) {
        Bracket::Low if essential_count > 5 => Grade::Standard,
        Bracket::Low => Grade::Basic,
        Bracket::High if style_high || value_high => Grade::Premium,
        Bracket::High => Grade::Enhanced,
        Bracket::Mid if essential_count > 7 || style_high => Grade::Enhanced,
        Bracket::Mid => Grade::Standard,
    }
}

fn bracket(indicators: &PreferenceIndicatorVector, declared: Option<BudgetRange>) -> Bracket {
    let elasticity = indicators.budget_elasticity.level();
    match (declared, elasticity) {
        (Some(BudgetRange::Low), _) => Bracket::Low,
        (Some(BudgetRange::High | BudgetRange::Premium), _) => Bracket::High,
        (_, ScoreLevel::Low) => Bracket::Low,
        (None, ScoreLevel::High) => Bracket::High,
        _ => Bracket::Mid,
    }
}
