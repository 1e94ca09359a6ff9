//! Answer impact records as stored in the catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Indicator, LifestyleType, PreferenceCategory};

/// Graded size of an indicator change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactMagnitude {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl ImpactMagnitude {
    pub fn points(&self) -> i32 {
        match self {
            ImpactMagnitude::Small => 10,
            ImpactMagnitude::Medium => 15,
            ImpactMagnitude::Large => 20,
            ImpactMagnitude::VeryLarge => 25,
        }
    }
}

/// An indicator delta: either a signed integer or a graded change.
///
/// ```yaml
/// noise_sensitivity: 12
/// storage_importance: { change: large }
/// budget_elasticity: { change: medium, negative: true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeltaSpec {
    Direct(i32),
    Graded {
        change: ImpactMagnitude,
        #[serde(default)]
        negative: bool,
    },
}

impl DeltaSpec {
    pub fn value(&self) -> i32 {
        match self {
            DeltaSpec::Direct(v) => *v,
            DeltaSpec::Graded { change, negative } => {
                if *negative {
                    -change.points()
                } else {
                    change.points()
                }
            }
        }
    }
}

/// One row of the generic answer-mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryImpact {
    pub category: PreferenceCategory,
    pub score: u8,
}

impl CategoryImpact {
    pub fn indicator_delta(&self) -> (Indicator, i32) {
        (
            self.category.indicator(),
            PreferenceCategory::delta_for(self.score),
        )
    }
}

/// Fallback question-criteria entry for one answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriteriaImpact {
    #[serde(default)]
    pub indicators: BTreeMap<Indicator, DeltaSpec>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub lifestyle: Option<LifestyleType>,
}

/// Resolved effect of a single answer on the profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerEffect {
    pub deltas: Vec<(Indicator, i32)>,
    pub keywords: Vec<String>,
    pub lifestyle: Option<LifestyleType>,
}

impl From<&[CategoryImpact]> for AnswerEffect {
    fn from(impacts: &[CategoryImpact]) -> Self {
        Self {
            deltas: impacts.iter().map(CategoryImpact::indicator_delta).collect(),
            ..Default::default()
        }
    }
}

impl From<&CriteriaImpact> for AnswerEffect {
    fn from(impact: &CriteriaImpact) -> Self {
        Self {
            deltas: impact
                .indicators
                .iter()
                .map(|(indicator, spec)| (*indicator, spec.value()))
                .collect(),
            keywords: impact.keywords.clone(),
            lifestyle: impact.lifestyle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitudes_match_fixed_points() {
        assert_eq!(ImpactMagnitude::Small.points(), 10);
        assert_eq!(ImpactMagnitude::Medium.points(), 15);
        assert_eq!(ImpactMagnitude::Large.points(), 20);
        assert_eq!(ImpactMagnitude::VeryLarge.points(), 25);
    }

    #[test]
    fn delta_spec_parses_both_shapes() {
        let yaml = "a: -12\nb: { change: large }\nc: { change: small, negative: true }\n";
        let parsed: BTreeMap<String, DeltaSpec> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed["a"].value(), -12);
        assert_eq!(parsed["b"].value(), 20);
        assert_eq!(parsed["c"].value(), -10);
    }

    #[test]
    fn category_impacts_become_indicator_deltas() {
        let impacts = [
            CategoryImpact {
                category: PreferenceCategory::OrganizationHabit,
                score: 9,
            },
            CategoryImpact {
                category: PreferenceCategory::BudgetSense,
                score: 3,
            },
        ];
        let effect = AnswerEffect::from(&impacts[..]);
        assert_eq!(
            effect.deltas,
            vec![
                (Indicator::StorageImportance, 35),
                (Indicator::BudgetElasticity, -25)
            ]
        );
        assert!(effect.keywords.is_empty());
        assert!(effect.lifestyle.is_none());
    }
}
