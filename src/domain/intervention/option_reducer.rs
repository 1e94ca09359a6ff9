//! Per-process option-list reduction.

use serde::{Deserialize, Serialize};

use super::{ProcessClassification, ReductionPath};
use crate::domain::axes::{InterventionLevel, JudgmentAxes};

/// Lists shorter than this are never reduced on the axis path.
pub const MIN_REDUCIBLE_OPTIONS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionTier {
    Basic,
    Comfort,
    Premium,
}

/// One alternative for a process, as offered by the estimator catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOption {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_standard: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<OptionTier>,
    /// Set on LATER processes that stay visible but can wait.
    #[serde(default)]
    pub deferrable: bool,
}

impl ProcessOption {
    fn is_budget(&self) -> bool {
        matches!(self.tier, Some(OptionTier::Basic | OptionTier::Comfort))
    }

    fn is_basic(&self) -> bool {
        self.tier == Some(OptionTier::Basic)
    }

    fn is_premium(&self) -> bool {
        self.tier == Some(OptionTier::Premium)
    }

    /// A non-standard alternative that is neither basic nor premium.
    fn is_design(&self) -> bool {
        !self.is_standard && !self.is_basic() && !self.is_premium()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedChoices {
    pub options: Vec<ProcessOption>,
    pub reason: String,
    pub original_count: usize,
    pub reduced_count: usize,
}

impl ReducedChoices {
    fn new(options: Vec<ProcessOption>, original_count: usize, reason: impl Into<String>) -> Self {
        Self {
            reduced_count: options.len(),
            options,
            reason: reason.into(),
            original_count,
        }
    }
}

/// Picks the first option matching each predicate in turn, never the same
/// option twice.
fn pick(options: &[ProcessOption], predicates: &[fn(&ProcessOption) -> bool]) -> Vec<ProcessOption> {
    let mut picked: Vec<ProcessOption> = Vec::new();
    for predicate in predicates {
        if let Some(option) = options
            .iter()
            .find(|o| predicate(o) && !picked.iter().any(|p| p.id == o.id))
        {
            picked.push(option.clone());
        }
    }
    picked
}

fn standard(o: &ProcessOption) -> bool {
    o.is_standard
}

fn first_standard_or_first(options: &[ProcessOption]) -> Vec<ProcessOption> {
    options
        .iter()
        .find(|o| o.is_standard)
        .or_else(|| options.first())
        .cloned()
        .into_iter()
        .collect()
}

/// Reduces one process's option list.
pub fn reduce_options(
    options: &[ProcessOption],
    classification: ProcessClassification,
    axes: &JudgmentAxes,
    path: &ReductionPath,
) -> ReducedChoices {
    let original = options.len();

    let level = match path {
        ReductionPath::ChoiceVariables { variables } => {
            if classification == ProcessClassification::Lock && variables.default_plan {
                if let Some(std_option) = options.iter().find(|o| o.is_standard) {
                    return ReducedChoices::new(
                        vec![std_option.clone()],
                        original,
                        "Irreversible process with a fixed default plan: standard option only.",
                    );
                }
            }
            let mut ordered: Vec<ProcessOption> =
                options.iter().filter(|o| o.is_standard).cloned().collect();
            ordered.extend(options.iter().filter(|o| !o.is_standard).cloned());
            ordered.truncate(variables.option_count.get());
            let reason = format!(
                "Reduced to {} options from your judgment answers.",
                variables.option_count.get()
            );
            return ReducedChoices::new(ordered, original, reason);
        }
        ReductionPath::AxisDriven { level } => *level,
    };

    if original < MIN_REDUCIBLE_OPTIONS {
        return ReducedChoices::new(
            options.to_vec(),
            original,
            "Fewer than six options, nothing to reduce.",
        );
    }

    match classification {
        ProcessClassification::Base => ReducedChoices::new(
            first_standard_or_first(options),
            original,
            "Base process: standard option only.",
        ),
        ProcessClassification::Lock => ReducedChoices::new(
            first_standard_or_first(options),
            original,
            "Irreversible process: standard option only.",
        ),
        ProcessClassification::Later if level == InterventionLevel::High => {
            ReducedChoices::new(Vec::new(), original, "Deferrable process removed for now.")
        }
        ProcessClassification::Later => {
            let deferred = options
                .iter()
                .cloned()
                .map(|mut o| {
                    o.deferrable = true;
                    o
                })
                .collect();
            ReducedChoices::new(deferred, original, "Can be done after move-in.")
        }
        ProcessClassification::Narrow => reduce_narrow(options, axes, level),
    }
}

fn reduce_narrow(
    options: &[ProcessOption],
    axes: &JudgmentAxes,
    level: InterventionLevel,
) -> ReducedChoices {
    let original = options.len();

    if axes.decision_drag.value() >= 70
        && axes.cost_sensitivity.value() >= 70
        && level == InterventionLevel::High
    {
        let two = pick(options, &[standard, ProcessOption::is_basic]);
        if !two.is_empty() {
            return ReducedChoices::new(
                two,
                original,
                "High decision drag and cost sensitivity: standard and budget options only.",
            );
        }
    }

    if axes.control_need.value() >= 85 && level == InterventionLevel::Low {
        let four = pick(
            options,
            &[
                standard,
                ProcessOption::is_basic,
                ProcessOption::is_premium,
                ProcessOption::is_design,
            ],
        );
        if four.len() >= 3 {
            return ReducedChoices::new(
                four,
                original,
                "Strong control need: four options including a design-led one.",
            );
        }
    }

    let mut selected = match level {
        InterventionLevel::High => pick(options, &[standard]),
        InterventionLevel::Mid => pick(options, &[standard, ProcessOption::is_budget]),
        InterventionLevel::Low => pick(
            options,
            &[standard, ProcessOption::is_budget, ProcessOption::is_premium],
        ),
    };
    if selected.is_empty() {
        selected.extend(options.first().cloned());
    }
    let reason = format!(
        "Intervention level {level}: reduced to {} option(s).",
        selected.len()
    );
    ReducedChoices::new(selected, original, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intervention::{ChoiceVariables, OptionCount};
    use crate::domain::foundation::Score;

    fn opt(id: &str, is_standard: bool, tier: Option<OptionTier>) -> ProcessOption {
        ProcessOption {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            is_standard,
            tier,
            deferrable: false,
        }
    }

    /// Eight options, two of them standard.
    fn eight() -> Vec<ProcessOption> {
        vec![
            opt("premium_a", false, Some(OptionTier::Premium)),
            opt("std_1", true, None),
            opt("basic_a", false, Some(OptionTier::Basic)),
            opt("std_2", true, Some(OptionTier::Comfort)),
            opt("comfort_a", false, Some(OptionTier::Comfort)),
            opt("design_a", false, None),
            opt("premium_b", false, Some(OptionTier::Premium)),
            opt("basic_b", false, Some(OptionTier::Basic)),
        ]
    }

    fn ids(r: &ReducedChoices) -> Vec<&str> {
        r.options.iter().map(|o| o.id.as_str()).collect()
    }

    fn axis(level: InterventionLevel) -> ReductionPath {
        ReductionPath::AxisDriven { level }
    }

    #[test]
    fn narrow_mid_keeps_standard_and_budget() {
        let r = reduce_options(
            &eight(),
            ProcessClassification::Narrow,
            &JudgmentAxes::default(),
            &axis(InterventionLevel::Mid),
        );
        assert_eq!(ids(&r), vec!["std_1", "basic_a"]);
        assert_eq!(r.original_count, 8);
        assert_eq!(r.reduced_count, 2);
    }

    #[test]
    fn narrow_low_keeps_three() {
        let r = reduce_options(
            &eight(),
            ProcessClassification::Narrow,
            &JudgmentAxes::default(),
            &axis(InterventionLevel::Low),
        );
        assert_eq!(ids(&r), vec!["std_1", "basic_a", "premium_a"]);
    }

    #[test]
    fn narrow_high_keeps_standard_only() {
        let r = reduce_options(
            &eight(),
            ProcessClassification::Narrow,
            &JudgmentAxes::default(),
            &axis(InterventionLevel::High),
        );
        assert_eq!(ids(&r), vec!["std_1"]);
    }

    #[test]
    fn exception_a_gives_two_at_high() {
        let axes = JudgmentAxes::new(75, 80, 72, 20);
        let r = reduce_options(
            &eight(),
            ProcessClassification::Narrow,
            &axes,
            &axis(InterventionLevel::High),
        );
        assert_eq!(ids(&r), vec!["std_1", "basic_a"]);
    }

    #[test]
    fn exception_b_expands_to_four_at_low() {
        let axes = JudgmentAxes::new(30, 20, 20, 90);
        let r = reduce_options(
            &eight(),
            ProcessClassification::Narrow,
            &axes,
            &axis(InterventionLevel::Low),
        );
        assert_eq!(ids(&r), vec!["std_1", "basic_a", "premium_a", "comfort_a"]);
    }

    #[test]
    fn exception_b_accepts_comfort_tier_as_design_pick() {
        let options = vec![
            opt("std_1", true, None),
            opt("basic_a", false, Some(OptionTier::Basic)),
            opt("basic_b", false, Some(OptionTier::Basic)),
            opt("premium_a", false, Some(OptionTier::Premium)),
            opt("premium_b", false, Some(OptionTier::Premium)),
            opt("comfort_a", false, Some(OptionTier::Comfort)),
        ];
        let axes = JudgmentAxes::new(30, 20, 20, 90);
        let r = reduce_options(
            &options,
            ProcessClassification::Narrow,
            &axes,
            &axis(InterventionLevel::Low),
        );
        assert_eq!(ids(&r), vec!["std_1", "basic_a", "premium_a", "comfort_a"]);
        assert_eq!(r.reduced_count, 4);
    }

    #[test]
    fn short_lists_are_untouched() {
        let five: Vec<_> = eight().into_iter().take(5).collect();
        let r = reduce_options(
            &five,
            ProcessClassification::Lock,
            &JudgmentAxes::default(),
            &axis(InterventionLevel::High),
        );
        assert_eq!(r.options, five);
    }

    #[test]
    fn base_and_lock_collapse_to_single_standard() {
        for class in [ProcessClassification::Base, ProcessClassification::Lock] {
            let r = reduce_options(
                &eight(),
                class,
                &JudgmentAxes::new(0, 0, 0, 100),
                &axis(InterventionLevel::Low),
            );
            assert_eq!(ids(&r), vec!["std_1"]);
        }
    }

    #[test]
    fn later_is_removed_at_high_and_deferred_otherwise() {
        let r = reduce_options(
            &eight(),
            ProcessClassification::Later,
            &JudgmentAxes::default(),
            &axis(InterventionLevel::High),
        );
        assert!(r.options.is_empty());
        assert_eq!(r.reduced_count, 0);

        let r = reduce_options(
            &eight(),
            ProcessClassification::Later,
            &JudgmentAxes::default(),
            &axis(InterventionLevel::Mid),
        );
        assert_eq!(r.options.len(), 8);
        assert!(r.options.iter().all(|o| o.deferrable));
    }

    #[test]
    fn narrow_without_standard_keeps_at_least_one() {
        let no_standard: Vec<_> = (0..6)
            .map(|i| opt(&format!("design_{i}"), false, None))
            .collect();
        let r = reduce_options(
            &no_standard,
            ProcessClassification::Narrow,
            &JudgmentAxes::default(),
            &axis(InterventionLevel::High),
        );
        assert_eq!(ids(&r), vec!["design_0"]);
    }

    #[test]
    fn choice_variables_lock_default_plan_keeps_single_standard() {
        let five = vec![
            opt("a", false, Some(OptionTier::Basic)),
            opt("b", false, Some(OptionTier::Premium)),
            opt("std", true, None),
            opt("d", false, None),
            opt("e", false, Some(OptionTier::Comfort)),
        ];
        let path = ReductionPath::ChoiceVariables {
            variables: ChoiceVariables {
                option_count: OptionCount::TWO,
                lock_strength: Score::new(80),
                default_plan: true,
            },
        };
        let r = reduce_options(
            &five,
            ProcessClassification::Lock,
            &JudgmentAxes::default(),
            &path,
        );
        assert_eq!(ids(&r), vec!["std"]);
    }

    #[test]
    fn choice_variables_slice_to_count_standard_first() {
        let path = ReductionPath::ChoiceVariables {
            variables: ChoiceVariables {
                option_count: OptionCount::THREE,
                lock_strength: Score::new(30),
                default_plan: false,
            },
        };
        let r = reduce_options(
            &eight(),
            ProcessClassification::Narrow,
            &JudgmentAxes::default(),
            &path,
        );
        assert_eq!(ids(&r), vec!["std_1", "std_2", "premium_a"]);
    }
}
