//! Judgment axes and the intervention level they imply.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Score;

/// Four decision-behaviour scores derived from a preference profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JudgmentAxes {
    pub cost_sensitivity: Score,
    pub risk_aversion: Score,
    pub decision_drag: Score,
    pub control_need: Score,
}

impl JudgmentAxes {
    pub fn new(cost_sensitivity: u8, risk_aversion: u8, decision_drag: u8, control_need: u8) -> Self {
        Self {
            cost_sensitivity: Score::new(cost_sensitivity),
            risk_aversion: Score::new(risk_aversion),
            decision_drag: Score::new(decision_drag),
            control_need: Score::new(control_need),
        }
    }

    /// Intervention level for these axes.
    pub fn intervention_level(&self) -> InterventionLevel {
        InterventionLevel::from_axes(self)
    }
}

impl Default for JudgmentAxes {
    fn default() -> Self {
        Self::new(50, 50, 50, 50)
    }
}

/// How aggressively choices get reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionLevel {
    Low,
    Mid,
    High,
}

impl InterventionLevel {
    /// Sum of three 1-3 point checks, bucketed: 8+ high, 5+ mid, else low.
    ///
    /// Cost sensitivity does not participate.
    pub fn from_axes(axes: &JudgmentAxes) -> Self {
        let points = Self::points(axes);
        if points >= 8 {
            InterventionLevel::High
        } else if points >= 5 {
            InterventionLevel::Mid
        } else {
            InterventionLevel::Low
        }
    }

    /// The raw 3..=9 bucket sum.
    pub fn points(axes: &JudgmentAxes) -> u8 {
        let risk = Self::high_is_intrusive(axes.risk_aversion);
        let drag = Self::high_is_intrusive(axes.decision_drag);
        let control = match axes.control_need.value() {
            v if v <= 30 => 3,
            v if v <= 50 => 2,
            _ => 1,
        };
        risk + drag + control
    }

    fn high_is_intrusive(score: Score) -> u8 {
        match score.value() {
            v if v >= 70 => 3,
            v if v >= 50 => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for InterventionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterventionLevel::Low => "low",
            InterventionLevel::Mid => "mid",
            InterventionLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}
