//! Risk value types.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskType {
    /// A present need no process addresses.
    Current,
    /// A need that will appear later.
    Future,
    /// Something absent from the plan itself.
    Missing,
}

/// Ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// Ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTiming {
    Immediate,
    ShortTerm,
    MidTerm,
    LongTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RiskType,
    pub level: RiskLevel,
    pub timing: RiskTiming,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub remedies: Vec<String>,
}

impl Risk {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: &str,
        kind: RiskType,
        level: RiskLevel,
        timing: RiskTiming,
        title: &str,
        description: &str,
        impact: &str,
        remedies: [&str; 2],
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            level,
            timing,
            title: title.to_string(),
            description: description.to_string(),
            impact: impact.to_string(),
            remedies: remedies.iter().map(|r| r.to_string()).collect(),
        }
    }
}
