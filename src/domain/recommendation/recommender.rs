//! Space and process recommender.

use serde::{Deserialize, Serialize};

use super::{
    apply_selection_deltas, rank_spaces, recommend_grade, sort_by_rank, BudgetRange, Grade,
    PrioritySpace, ProcessPriority, RecommendedProcess,
};
use crate::domain::catalog::Catalog;
use crate::domain::profile::PreferenceIndicatorVector;

/// Recommender output.
///
/// `adjusted_indicators` already carries the selection feedback and is the
/// vector every later stage must use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority_spaces: Vec<PrioritySpace>,
    pub processes: Vec<RecommendedProcess>,
    pub adjusted_indicators: PreferenceIndicatorVector,
    pub grade: Grade,
}

impl Recommendation {
    pub fn essential_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_essential()).count()
    }
}

pub struct SpaceProcessRecommender<'a> {
    catalog: &'a Catalog,
}

impl<'a> SpaceProcessRecommender<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Ranks spaces, generates processes, reconciles customer selections,
    /// applies selection feedback and picks a grade.
    pub fn recommend(
        &self,
        indicators: &PreferenceIndicatorVector,
        selected_spaces: &[String],
        selected_processes: &[String],
        budget: Option<BudgetRange>,
    ) -> Recommendation {
        let priority_spaces = rank_spaces(self.catalog, indicators, selected_spaces);
        let generated = self.generate_processes(&priority_spaces, indicators);
        let processes = self.reconcile_selections(generated, selected_processes);
        let adjusted_indicators =
            apply_selection_deltas(self.catalog, indicators, selected_processes);

        let essentials = processes.iter().filter(|p| p.is_essential()).count();
        let grade = recommend_grade(&adjusted_indicators, essentials, budget);

        tracing::debug!(
            spaces = priority_spaces.len(),
            processes = processes.len(),
            essentials,
            grade = %grade,
            "recommendation built"
        );

        Recommendation {
            priority_spaces,
            processes,
            adjusted_indicators,
            grade,
        }
    }

    /// Evaluates every rule of every ranked space against `indicators`.
    pub fn generate_processes(
        &self,
        spaces: &[PrioritySpace],
        indicators: &PreferenceIndicatorVector,
    ) -> Vec<RecommendedProcess> {
        let mut processes: Vec<RecommendedProcess> = Vec::new();
        for space in spaces {
            let Some((_, def)) = self.catalog.space(&space.space_id) else {
                continue;
            };
            for rule in &def.processes {
                let value = indicators.get(rule.indicator);
                if value.value() < rule.min_score {
                    continue;
                }
                if processes.iter().any(|p| p.id == rule.id) {
                    continue;
                }
                processes.push(RecommendedProcess::from_rule(rule, value));
            }
        }
        sort_by_rank(&mut processes);
        processes
    }

    /// Upgrades selected processes to essential and appends selections
    /// that were not recommended.
    pub fn reconcile_selections(
        &self,
        mut processes: Vec<RecommendedProcess>,
        selected: &[String],
    ) -> Vec<RecommendedProcess> {
        for id in selected {
            match processes.iter_mut().find(|p| &p.id == id) {
                Some(existing) => existing.upgrade_to(ProcessPriority::Essential),
                None => processes.push(RecommendedProcess::selected(
                    id,
                    self.catalog.process_rule(id),
                )),
            }
        }
        sort_by_rank(&mut processes);
        processes
    }
}
