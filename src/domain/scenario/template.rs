//! Scenario templates as stored in the catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::profile::{Indicator, LifestyleType};

/// Inclusive score bounds; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorRange {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

impl IndicatorRange {
    pub fn contains(&self, value: u8) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Inclusive household-size bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeRange {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

impl SizeRange {
    pub fn contains(&self, value: u8) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// All present conditions must hold for a template to match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConditions {
    pub indicators: BTreeMap<Indicator, IndicatorRange>,
    /// Any listed lifestyle matches. Empty means no constraint.
    pub lifestyle: Vec<LifestyleType>,
    pub has_kids: Option<bool>,
    pub has_pets: Option<bool>,
    pub family_size: Option<SizeRange>,
}

impl ScenarioConditions {
    /// Rejects bounds that can never match.
    pub fn check_ranges(&self) -> Result<(), String> {
        for (indicator, range) in &self.indicators {
            if let Some(min) = range.min {
                if min > 100 {
                    return Err(format!("{indicator} min {min} exceeds 100"));
                }
            }
            if let Some(max) = range.max {
                if max > 100 {
                    return Err(format!("{indicator} max {max} exceeds 100"));
                }
            }
            if let (Some(min), Some(max)) = (range.min, range.max) {
                if min > max {
                    return Err(format!("{indicator} min {min} is above max {max}"));
                }
            }
        }
        if let Some(SizeRange {
            min: Some(min),
            max: Some(max),
        }) = self.family_size
        {
            if min > max {
                return Err(format!("family_size min {min} is above max {max}"));
            }
        }
        Ok(())
    }
}

/// Three-part story told for a matched scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioNarrative {
    pub current: String,
    #[serde(rename = "without")]
    pub without_change: String,
    #[serde(rename = "with")]
    pub with_change: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTemplate {
    pub id: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub conditions: ScenarioConditions,
    pub narrative: ScenarioNarrative,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub priority_spaces: Vec<String>,
    #[serde(default)]
    pub priority_processes: Vec<String>,
}
