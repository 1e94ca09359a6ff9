//! Recommended processes and their ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::catalog::ProcessRule;
use crate::domain::foundation::Score;

/// Score given to a process the customer selected without a recommendation.
pub const SELECTED_PROCESS_SCORE: u8 = 70;

/// Category of a selected process with no catalog rule.
pub const OTHER_CATEGORY: &str = "other";

/// Priority tier. Ordering is essential < recommended < optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessPriority {
    Essential,
    Recommended,
    Optional,
}

impl fmt::Display for ProcessPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessPriority::Essential => "essential",
            ProcessPriority::Recommended => "recommended",
            ProcessPriority::Optional => "optional",
        };
        write!(f, "{}", s)
    }
}

/// Four-tier cost estimate in KRW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub basic: u64,
    pub standard: u64,
    pub enhanced: u64,
    pub premium: u64,
}

impl CostEstimate {
    pub fn average(&self) -> f64 {
        (self.basic + self.standard + self.enhanced + self.premium) as f64 / 4.0
    }

    pub fn exceeds(&self, threshold: u64) -> bool {
        self.average() > threshold as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProcess {
    pub id: String,
    pub label: String,
    pub category: String,
    pub priority: ProcessPriority,
    pub score: Score,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<CostEstimate>,
}

impl RecommendedProcess {
    /// Builds a process from a catalog rule and the indicator value that triggered it.
    pub fn from_rule(rule: &ProcessRule, value: Score) -> Self {
        let essential = rule.essential_at.is_some_and(|at| value.value() >= at);
        Self {
            id: rule.id.clone(),
            label: rule.label.clone(),
            category: rule.category.clone(),
            priority: if essential {
                ProcessPriority::Essential
            } else {
                ProcessPriority::Recommended
            },
            score: value,
            rationale: rule.rationale.clone(),
            cost_estimate: rule.cost,
        }
    }

    /// A process the customer picked that no rule recommended.
    pub fn selected(id: &str, rule: Option<&ProcessRule>) -> Self {
        Self {
            id: id.to_string(),
            label: rule.map_or_else(|| id.to_string(), |r| r.label.clone()),
            category: rule.map_or_else(|| OTHER_CATEGORY.to_string(), |r| r.category.clone()),
            priority: ProcessPriority::Essential,
            score: Score::new(SELECTED_PROCESS_SCORE),
            rationale: "Selected directly by the customer.".to_string(),
            cost_estimate: rule.and_then(|r| r.cost),
        }
    }

    /// Raises priority to `priority` if that is higher. Never lowers it.
    pub fn upgrade_to(&mut self, priority: ProcessPriority) {
        if priority < self.priority {
            self.priority = priority;
        }
    }

    pub fn is_essential(&self) -> bool {
        self.priority == ProcessPriority::Essential
    }
}

/// Priority ascending, then score descending.
pub fn by_rank(a: &RecommendedProcess, b: &RecommendedProcess) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| b.score.cmp(&a.score))
}

pub fn sort_by_rank(processes: &mut [RecommendedProcess]) {
    processes.sort_by(by_rank);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Indicator;

    fn process(id: &str, priority: ProcessPriority, score: u8) -> RecommendedProcess {
        RecommendedProcess {
            id: id.to_string(),
            label: id.to_string(),
            category: "test".to_string(),
            priority,
            score: Score::new(score),
            rationale: String::new(),
            cost_estimate: None,
        }
    }

    fn rule(essential_at: Option<u8>) -> ProcessRule {
        ProcessRule {
            id: "kitchen_layout".to_string(),
            label: "Kitchen workflow layout".to_string(),
            category: "kitchen".to_string(),
            indicator: Indicator::FlowImportance,
            min_score: 50,
            essential_at,
            rationale: "flow".to_string(),
            cost: None,
        }
    }

    #[test]
    fn rule_becomes_essential_at_threshold() {
        let p = RecommendedProcess::from_rule(&rule(Some(60)), Score::new(60));
        assert_eq!(p.priority, ProcessPriority::Essential);
        let p = RecommendedProcess::from_rule(&rule(Some(60)), Score::new(59));
        assert_eq!(p.priority, ProcessPriority::Recommended);
        let p = RecommendedProcess::from_rule(&rule(None), Score::new(99));
        assert_eq!(p.priority, ProcessPriority::Recommended);
    }

    #[test]
    fn upgrade_never_downgrades() {
        let mut p = process("a", ProcessPriority::Essential, 50);
        p.upgrade_to(ProcessPriority::Optional);
        assert_eq!(p.priority, ProcessPriority::Essential);

        let mut p = process("b", ProcessPriority::Optional, 50);
        p.upgrade_to(ProcessPriority::Recommended);
        assert_eq!(p.priority, ProcessPriority::Recommended);
    }

    #[test]
    fn sort_orders_priority_then_score() {
        let mut list = vec![
            process("r90", ProcessPriority::Recommended, 90),
            process("e60", ProcessPriority::Essential, 60),
            process("e80", ProcessPriority::Essential, 80),
            process("o99", ProcessPriority::Optional, 99),
        ];
        sort_by_rank(&mut list);
        let ids: Vec<_> = list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["e80", "e60", "r90", "o99"]);
    }

    #[test]
    fn cost_average_uses_all_four_tiers() {
        let cost = CostEstimate {
            basic: 3_500_000,
            standard: 5_000_000,
            enhanced: 7_000_000,
            premium: 9_500_000,
        };
        assert_eq!(cost.average(), 6_250_000.0);
        assert!(cost.exceeds(5_000_000));
        assert!(!cost.exceeds(6_250_000));
    }

    #[test]
    fn unknown_selection_uses_defaults() {
        let p = RecommendedProcess::selected("demolition", None);
        assert_eq!(p.priority, ProcessPriority::Essential);
        assert_eq!(p.score.value(), 70);
        assert_eq!(p.category, "other");
        assert_eq!(p.label, "demolition");
    }
}
