//! Adapters from each profile representation to judgment axes.

use super::JudgmentAxes;
use crate::domain::foundation::Score;
use crate::domain::profile::{CategoryScores, PreferenceCategory, PreferenceIndicatorVector};

/// Anything that can be read as a set of judgment axes.
///
/// Every implementation must keep the same direction per axis: more budget
/// flexibility lowers cost sensitivity, more upkeep or comfort concern
/// raises risk aversion, more tolerance for construction lowers decision
/// drag, and stronger taste raises control need.
pub trait AxisSource {
    fn judgment_axes(&self) -> JudgmentAxes;
}

impl AxisSource for PreferenceIndicatorVector {
    fn judgment_axes(&self) -> JudgmentAxes {
        let risk = (self.noise_sensitivity.as_f64() + self.maintenance_sensitivity.as_f64()) / 2.0;
        JudgmentAxes {
            cost_sensitivity: self.budget_elasticity.inverted(),
            risk_aversion: Score::from_f64(risk),
            decision_drag: self.construction_tolerance.inverted(),
            control_need: self.style_attachment,
        }
    }
}

impl AxisSource for CategoryScores {
    fn judgment_axes(&self) -> JudgmentAxes {
        let budget = self.get(PreferenceCategory::BudgetSense);
        let health = self.get(PreferenceCategory::HealthFactors);
        let discomfort = self.get(PreferenceCategory::DiscomfortFactors);
        let organization = self.get(PreferenceCategory::OrganizationHabit);
        let space = self.get(PreferenceCategory::SpaceSense);
        JudgmentAxes {
            cost_sensitivity: Score::from_f64((10.0 - budget) * 10.0),
            risk_aversion: Score::from_f64((health + discomfort) / 2.0 * 10.0),
            decision_drag: Score::from_f64((10.0 - organization) * 10.0),
            control_need: Score::from_f64(space * 10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Indicator;

    #[test]
    fn vector_adapter_formulas() {
        let v = PreferenceIndicatorVector::neutral()
            .with(Indicator::BudgetElasticity, 30)
            .with(Indicator::NoiseSensitivity, 81)
            .with(Indicator::MaintenanceSensitivity, 60)
            .with(Indicator::ConstructionTolerance, 10)
            .with(Indicator::StyleAttachment, 88);
        let axes = v.judgment_axes();
        assert_eq!(axes.cost_sensitivity.value(), 70);
        // (81 + 60) / 2 = 70.5 rounds up
        assert_eq!(axes.risk_aversion.value(), 71);
        assert_eq!(axes.decision_drag.value(), 90);
        assert_eq!(axes.control_need.value(), 88);
    }

    #[test]
    fn neutral_vector_gives_neutral_axes() {
        assert_eq!(
            PreferenceIndicatorVector::neutral().judgment_axes(),
            JudgmentAxes::default()
        );
    }

    #[test]
    fn category_adapter_formulas() {
        let scores = CategoryScores::new()
            .with(PreferenceCategory::BudgetSense, 3.0)
            .with(PreferenceCategory::HealthFactors, 8.0)
            .with(PreferenceCategory::DiscomfortFactors, 7.0)
            .with(PreferenceCategory::OrganizationHabit, 2.5)
            .with(PreferenceCategory::SpaceSense, 9.0);
        let axes = scores.judgment_axes();
        assert_eq!(axes.cost_sensitivity.value(), 70);
        assert_eq!(axes.risk_aversion.value(), 75);
        assert_eq!(axes.decision_drag.value(), 75);
        assert_eq!(axes.control_need.value(), 90);
    }

    #[test]
    fn category_defaults_read_as_midpoint() {
        let axes = CategoryScores::new().judgment_axes();
        assert_eq!(axes, JudgmentAxes::new(50, 50, 50, 50));
    }

    #[test]
    fn both_adapters_agree_on_direction() {
        let tight = PreferenceIndicatorVector::neutral().with(Indicator::BudgetElasticity, 20);
        let loose = PreferenceIndicatorVector::neutral().with(Indicator::BudgetElasticity, 80);
        assert!(tight.judgment_axes().cost_sensitivity > loose.judgment_axes().cost_sensitivity);

        let tight = CategoryScores::new().with(PreferenceCategory::BudgetSense, 2.0);
        let loose = CategoryScores::new().with(PreferenceCategory::BudgetSense, 8.0);
        assert!(tight.judgment_axes().cost_sensitivity > loose.judgment_axes().cost_sensitivity);

        let timid = PreferenceIndicatorVector::neutral().with(Indicator::ConstructionTolerance, 20);
        let bold = PreferenceIndicatorVector::neutral().with(Indicator::ConstructionTolerance, 80);
        assert!(timid.judgment_axes().decision_drag > bold.judgment_axes().decision_drag);

        let messy = CategoryScores::new().with(PreferenceCategory::OrganizationHabit, 2.0);
        let tidy = CategoryScores::new().with(PreferenceCategory::OrganizationHabit, 8.0);
        assert!(messy.judgment_axes().decision_drag > tidy.judgment_axes().decision_drag);
    }
}
