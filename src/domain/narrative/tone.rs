//! Narration tone chosen from the adjusted profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::profile::PreferenceIndicatorVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Warm,
    #[default]
    Empathetic,
    Logical,
    Direct,
}

impl Tone {
    /// First matching rule wins:
    /// family impact >= 70 → warm, style attachment >= 70 → empathetic,
    /// budget elasticity <= 40 → logical, home value >= 70 → direct.
    pub fn select(indicators: &PreferenceIndicatorVector) -> Self {
        if indicators.family_impact.value() >= 70 {
            Tone::Warm
        } else if indicators.style_attachment.value() >= 70 {
            Tone::Empathetic
        } else if indicators.budget_elasticity.value() <= 40 {
            Tone::Logical
        } else if indicators.home_value_consciousness.value() >= 70 {
            Tone::Direct
        } else {
            Tone::default()
        }
    }

    /// Style guidance handed to a language model.
    pub fn guide(&self) -> &'static str {
        match self {
            Tone::Warm => {
                "Warm: speak like someone who knows this home is shared with family. \
                 Be friendly and caring while staying professional."
            }
            Tone::Empathetic => {
                "Empathetic: acknowledge why the customer is hesitating before explaining. \
                 Reflect their feelings often."
            }
            Tone::Logical => {
                "Logical: organise the situation by data and daily patterns. \
                 Give numbers, reasons and a clear line of argument."
            }
            Tone::Direct => {
                "Direct: lead with the conclusion and keep to the essentials. \
                 Be brief without being rude."
            }
        }
    }

    /// Opening phrase used by the template narrator.
    pub fn opening(&self) -> &'static str {
        match self {
            Tone::Warm => "Since this is a home you share with your family,",
            Tone::Empathetic => "It is completely understandable to weigh these choices carefully.",
            Tone::Logical => "Looking at your answers and daily patterns,",
            Tone::Direct => "In short,",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tone::Warm => "warm",
            Tone::Empathetic => "empathetic",
            Tone::Logical => "logical",
            Tone::Direct => "direct",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Indicator;

    #[test]
    fn neutral_profile_is_empathetic() {
        assert_eq!(Tone::select(&PreferenceIndicatorVector::neutral()), Tone::Empathetic);
    }

    #[test]
    fn family_impact_takes_precedence() {
        let v = PreferenceIndicatorVector::neutral()
            .with(Indicator::FamilyImpact, 70)
            .with(Indicator::BudgetElasticity, 10);
        assert_eq!(Tone::select(&v), Tone::Warm);
    }

    #[test]
    fn tight_budget_is_logical() {
        let v = PreferenceIndicatorVector::neutral()
            .with(Indicator::BudgetElasticity, 40)
            .with(Indicator::HomeValueConsciousness, 90);
        assert_eq!(Tone::select(&v), Tone::Logical);
    }

    #[test]
    fn resale_focus_is_direct() {
        let v = PreferenceIndicatorVector::neutral().with(Indicator::HomeValueConsciousness, 75);
        assert_eq!(Tone::select(&v), Tone::Direct);
    }
}
