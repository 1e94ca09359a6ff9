//! Intervention engine: level, reduction path, reduced lists and warnings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    generate_warnings, reduce_options, reduce_processes, ChoiceVariables, ProcessOption,
    ProcessWarning, ReducedChoices, ReductionPath, ReductionSummary,
};
use crate::domain::axes::{InterventionLevel, JudgmentAxes};
use crate::domain::catalog::Catalog;
use crate::domain::recommendation::RecommendedProcess;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionOutcome {
    pub level: InterventionLevel,
    pub path: ReductionPath,
    pub processes: Vec<RecommendedProcess>,
    pub summary: ReductionSummary,
    pub warnings: Vec<ProcessWarning>,
    /// Reduced option list per surviving process id.
    pub option_lists: BTreeMap<String, ReducedChoices>,
}

pub struct InterventionEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> InterventionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn analyze(
        &self,
        processes: &[RecommendedProcess],
        axes: &JudgmentAxes,
        choice_variables: Option<ChoiceVariables>,
        option_lists: &BTreeMap<String, Vec<ProcessOption>>,
    ) -> InterventionOutcome {
        let level = InterventionLevel::from_axes(axes);
        let path = ReductionPath::resolve(level, choice_variables);

        let (kept, summary) = reduce_processes(self.catalog, processes, axes, &path);

        let lock_strength = path.choice_variables().map(|cv| cv.lock_strength);
        let warnings = generate_warnings(self.catalog, &kept, axes, level, lock_strength);

        let reduced_options: BTreeMap<String, ReducedChoices> = kept
            .iter()
            .filter_map(|p| option_lists.get(&p.id).map(|options| (p, options)))
            .map(|(p, options)| {
                let class = self.catalog.classification_of(&p.id);
                (p.id.clone(), reduce_options(options, class, axes, &path))
            })
            .collect();

        tracing::debug!(
            level = %level,
            axis_driven = path.is_axis_driven(),
            kept = kept.len(),
            warnings = warnings.len(),
            "intervention applied"
        );

        InterventionOutcome {
            level,
            path,
            processes: kept,
            summary,
            warnings,
            option_lists: reduced_options,
        }
    }
}
