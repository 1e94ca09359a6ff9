//! Choice variables aggregated from judgment questions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::{Score, ValidationError};
use crate::domain::profile::SKIP_ANSWER;

/// Number of options to present: 2, 3 or 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionCount(u8);

impl OptionCount {
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);

    pub fn get(&self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for OptionCount {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(2..=4).contains(&value) {
            return Err(ValidationError::out_of_range(
                "option_count",
                2,
                4,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }
}

impl From<OptionCount> for u8 {
    fn from(count: OptionCount) -> Self {
        count.0
    }
}

/// Directly supplied reduction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceVariables {
    pub option_count: OptionCount,
    pub lock_strength: Score,
    pub default_plan: bool,
}

impl Default for ChoiceVariables {
    fn default() -> Self {
        Self {
            option_count: OptionCount::THREE,
            lock_strength: Score::NEUTRAL,
            default_plan: false,
        }
    }
}

/// Contribution of a single judgment answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialChoiceVariables {
    #[serde(default)]
    pub lock_strength: Option<u8>,
    #[serde(default)]
    pub option_count: Option<OptionCount>,
    #[serde(default)]
    pub default_plan: Option<bool>,
}

impl PartialChoiceVariables {
    fn is_empty(&self) -> bool {
        self.lock_strength.is_none() && self.option_count.is_none() && self.default_plan.is_none()
    }
}

impl ChoiceVariables {
    /// Aggregates judgment answers.
    ///
    /// Lock strength is the rounded mean, option count the minimum, and the
    /// default plan is set if any answer sets it. Returns `None` when no
    /// answer contributed anything.
    pub fn aggregate(catalog: &Catalog, answers: &BTreeMap<String, String>) -> Option<Self> {
        let contributions: Vec<&PartialChoiceVariables> = answers
            .iter()
            .filter(|(_, answer)| answer.as_str() != SKIP_ANSWER)
            .filter_map(|(question, answer)| catalog.choice_answer(question, answer))
            .filter(|partial| !partial.is_empty())
            .collect();

        if contributions.is_empty() {
            return None;
        }

        let mut result = Self::default();

        let locks: Vec<u32> = contributions
            .iter()
            .filter_map(|p| p.lock_strength)
            .map(u32::from)
            .collect();
        if !locks.is_empty() {
            let mean = f64::from(locks.iter().sum::<u32>()) / locks.len() as f64;
            result.lock_strength = Score::from_f64(mean);
        }

        if let Some(min) = contributions.iter().filter_map(|p| p.option_count).min() {
            result.option_count = min;
        }

        let plans: Vec<bool> = contributions.iter().filter_map(|p| p.default_plan).collect();
        if !plans.is_empty() {
            result.default_plan = plans.iter().any(|p| *p);
        }

        tracing::debug!(
            contributions = contributions.len(),
            option_count = result.option_count.get(),
            lock_strength = result.lock_strength.value(),
            default_plan = result.default_plan,
            "choice variables aggregated"
        );

        Some(result)
    }
}
