//! The twelve preference indicators and the vector that holds them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Score;

/// One named preference dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    StorageImportance,
    FlowImportance,
    LightingPreference,
    NoiseSensitivity,
    MaintenanceSensitivity,
    StyleAttachment,
    ColorPreference,
    FamilyImpact,
    PetImpact,
    BudgetElasticity,
    ConstructionTolerance,
    HomeValueConsciousness,
}

impl Indicator {
    /// All indicators in declaration order.
    pub const ALL: [Indicator; 12] = [
        Indicator::StorageImportance,
        Indicator::FlowImportance,
        Indicator::LightingPreference,
        Indicator::NoiseSensitivity,
        Indicator::MaintenanceSensitivity,
        Indicator::StyleAttachment,
        Indicator::ColorPreference,
        Indicator::FamilyImpact,
        Indicator::PetImpact,
        Indicator::BudgetElasticity,
        Indicator::ConstructionTolerance,
        Indicator::HomeValueConsciousness,
    ];

    /// Human-readable area label used for priority areas.
    pub fn area_label(&self) -> &'static str {
        match self {
            Indicator::StorageImportance => "storage",
            Indicator::FlowImportance => "circulation",
            Indicator::LightingPreference => "lighting",
            Indicator::NoiseSensitivity => "soundproofing",
            Indicator::MaintenanceSensitivity => "cleaning and upkeep",
            Indicator::StyleAttachment => "style",
            Indicator::ColorPreference => "color",
            Indicator::FamilyImpact => "family space",
            Indicator::PetImpact => "pets",
            Indicator::BudgetElasticity => "budget",
            Indicator::ConstructionTolerance => "structural change",
            Indicator::HomeValueConsciousness => "resale value",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Indicator::StorageImportance => "storage_importance",
            Indicator::FlowImportance => "flow_importance",
            Indicator::LightingPreference => "lighting_preference",
            Indicator::NoiseSensitivity => "noise_sensitivity",
            Indicator::MaintenanceSensitivity => "maintenance_sensitivity",
            Indicator::StyleAttachment => "style_attachment",
            Indicator::ColorPreference => "color_preference",
            Indicator::FamilyImpact => "family_impact",
            Indicator::PetImpact => "pet_impact",
            Indicator::BudgetElasticity => "budget_elasticity",
            Indicator::ConstructionTolerance => "construction_tolerance",
            Indicator::HomeValueConsciousness => "home_value_consciousness",
        };
        write!(f, "{}", s)
    }
}

/// Twelve bounded preference scores, every one starting at 50.
///
/// Every mutation goes through [`Score`], so values can never leave 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceIndicatorVector {
    pub storage_importance: Score,
    pub flow_importance: Score,
    pub lighting_preference: Score,
    pub noise_sensitivity: Score,
    pub maintenance_sensitivity: Score,
    pub style_attachment: Score,
    pub color_preference: Score,
    pub family_impact: Score,
    pub pet_impact: Score,
    pub budget_elasticity: Score,
    pub construction_tolerance: Score,
    pub home_value_consciousness: Score,
}

impl PreferenceIndicatorVector {
    /// The all-50 vector.
    pub fn neutral() -> Self {
        Self {
            storage_importance: Score::NEUTRAL,
            flow_importance: Score::NEUTRAL,
            lighting_preference: Score::NEUTRAL,
            noise_sensitivity: Score::NEUTRAL,
            maintenance_sensitivity: Score::NEUTRAL,
            style_attachment: Score::NEUTRAL,
            color_preference: Score::NEUTRAL,
            family_impact: Score::NEUTRAL,
            pet_impact: Score::NEUTRAL,
            budget_elasticity: Score::NEUTRAL,
            construction_tolerance: Score::NEUTRAL,
            home_value_consciousness: Score::NEUTRAL,
        }
    }

    pub fn get(&self, indicator: Indicator) -> Score {
        match indicator {
            Indicator::StorageImportance => self.storage_importance,
            Indicator::FlowImportance => self.flow_importance,
            Indicator::LightingPreference => self.lighting_preference,
            Indicator::NoiseSensitivity => self.noise_sensitivity,
            Indicator::MaintenanceSensitivity => self.maintenance_sensitivity,
            Indicator::StyleAttachment => self.style_attachment,
            Indicator::ColorPreference => self.color_preference,
            Indicator::FamilyImpact => self.family_impact,
            Indicator::PetImpact => self.pet_impact,
            Indicator::BudgetElasticity => self.budget_elasticity,
            Indicator::ConstructionTolerance => self.construction_tolerance,
            Indicator::HomeValueConsciousness => self.home_value_consciousness,
        }
    }

    fn slot_mut(&mut self, indicator: Indicator) -> &mut Score {
        match indicator {
            Indicator::StorageImportance => &mut self.storage_importance,
            Indicator::FlowImportance => &mut self.flow_importance,
            Indicator::LightingPreference => &mut self.lighting_preference,
            Indicator::NoiseSensitivity => &mut self.noise_sensitivity,
            Indicator::MaintenanceSensitivity => &mut self.maintenance_sensitivity,
            Indicator::StyleAttachment => &mut self.style_attachment,
            Indicator::ColorPreference => &mut self.color_preference,
            Indicator::FamilyImpact => &mut self.family_impact,
            Indicator::PetImpact => &mut self.pet_impact,
            Indicator::BudgetElasticity => &mut self.budget_elasticity,
            Indicator::ConstructionTolerance => &mut self.construction_tolerance,
            Indicator::HomeValueConsciousness => &mut self.home_value_consciousness,
        }
    }

    pub fn set(&mut self, indicator: Indicator, value: Score) {
        *self.slot_mut(indicator) = value;
    }

    /// Adds a signed delta to one indicator, clamping immediately.
    pub fn apply(&mut self, indicator: Indicator, delta: i32) {
        let slot = self.slot_mut(indicator);
        *slot = slot.shifted(delta);
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, indicator: Indicator, value: u8) -> Self {
        self.set(indicator, Score::new(value));
        self
    }

    /// Iterates `(indicator, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, Score)> + '_ {
        Indicator::ALL.iter().map(move |&i| (i, self.get(i)))
    }

    /// The `n` highest indicators, ties resolved by declaration order.
    pub fn top(&self, n: usize) -> Vec<(Indicator, Score)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl Default for PreferenceIndicatorVector {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_vector_is_all_fifty() {
        let v = PreferenceIndicatorVector::neutral();
        assert!(v.iter().all(|(_, s)| s == Score::NEUTRAL));
        assert_eq!(v.iter().count(), 12);
    }

    #[test]
    fn apply_clamps_each_step() {
        let mut v = PreferenceIndicatorVector::neutral();
        v.apply(Indicator::StorageImportance, 80);
        assert_eq!(v.storage_importance, Score::MAX);
        v.apply(Indicator::StorageImportance, -30);
        assert_eq!(v.storage_importance.value(), 70);
    }

    #[test]
    fn get_and_set_address_the_same_slot() {
        for indicator in Indicator::ALL {
            let mut v = PreferenceIndicatorVector::neutral();
            v.set(indicator, Score::new(91));
            assert_eq!(v.get(indicator).value(), 91);
            let others = v.iter().filter(|(i, _)| *i != indicator);
            assert!(others.into_iter().all(|(_, s)| s == Score::NEUTRAL));
        }
    }

    #[test]
    fn top_prefers_declaration_order_on_ties() {
        let v = PreferenceIndicatorVector::neutral()
            .with(Indicator::NoiseSensitivity, 70)
            .with(Indicator::FlowImportance, 70)
            .with(Indicator::PetImpact, 90);
        let top: Vec<_> = v.top(3).into_iter().map(|(i, _)| i).collect();
        assert_eq!(
            top,
            vec![
                Indicator::PetImpact,
                Indicator::FlowImportance,
                Indicator::NoiseSensitivity
            ]
        );
    }

    #[test]
    fn display_matches_serde_name() {
        for indicator in Indicator::ALL {
            let json = serde_json::to_string(&indicator).unwrap();
            assert_eq!(json, format!("\"{}\"", indicator));
        }
    }
}
