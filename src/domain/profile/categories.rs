//! Preference categories on the older 1-10 scale.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Indicator;

/// Questionnaire category, scored 1 to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceCategory {
    SpaceSense,
    SensorySensitivity,
    CleaningPreference,
    OrganizationHabit,
    FamilyComposition,
    HealthFactors,
    BudgetSense,
    ColorPreference,
    LightingPreference,
    HomePurpose,
    DiscomfortFactors,
    ActivityFlow,
    LifeRoutine,
    SleepPattern,
    HobbyLifestyle,
}

impl PreferenceCategory {
    /// The indicator a category score feeds into.
    pub fn indicator(&self) -> Indicator {
        match self {
            PreferenceCategory::SpaceSense => Indicator::StyleAttachment,
            PreferenceCategory::SensorySensitivity => Indicator::NoiseSensitivity,
            PreferenceCategory::CleaningPreference => Indicator::MaintenanceSensitivity,
            PreferenceCategory::OrganizationHabit => Indicator::StorageImportance,
            PreferenceCategory::FamilyComposition => Indicator::FamilyImpact,
            PreferenceCategory::HealthFactors => Indicator::MaintenanceSensitivity,
            PreferenceCategory::BudgetSense => Indicator::BudgetElasticity,
            PreferenceCategory::ColorPreference => Indicator::ColorPreference,
            PreferenceCategory::LightingPreference => Indicator::LightingPreference,
            PreferenceCategory::HomePurpose => Indicator::HomeValueConsciousness,
            PreferenceCategory::DiscomfortFactors => Indicator::ConstructionTolerance,
            PreferenceCategory::ActivityFlow => Indicator::FlowImportance,
            PreferenceCategory::LifeRoutine => Indicator::FamilyImpact,
            PreferenceCategory::SleepPattern => Indicator::NoiseSensitivity,
            PreferenceCategory::HobbyLifestyle => Indicator::StyleAttachment,
        }
    }

    /// Converts a 1-10 category score into a signed indicator delta.
    ///
    /// 5.5 is neutral: a 9 becomes +35, a 2 becomes -35.
    pub fn delta_for(score: u8) -> i32 {
        i32::from(score) * 10 - 55
    }
}

/// Per-category scores on the 1-10 scale. Missing categories read as 5.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<PreferenceCategory, f64>);

impl CategoryScores {
    pub const DEFAULT_SCORE: f64 = 5.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a category score, clamped to 1..=10.
    pub fn set(&mut self, category: PreferenceCategory, score: f64) {
        let score = if score.is_nan() {
            Self::DEFAULT_SCORE
        } else {
            score.clamp(1.0, 10.0)
        };
        self.0.insert(category, score);
    }

    pub fn with(mut self, category: PreferenceCategory, score: f64) -> Self {
        self.set(category, score);
        self
    }

    pub fn get(&self, category: PreferenceCategory) -> f64 {
        self.0
            .get(&category)
            .copied()
            .unwrap_or(Self::DEFAULT_SCORE)
    }
}
