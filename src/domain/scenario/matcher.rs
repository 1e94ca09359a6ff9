//! Condition filtering and relevance scoring of scenario templates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{ScenarioNarrative, ScenarioTemplate};
use crate::domain::catalog::Catalog;
use crate::domain::profile::{Indicator, LifestyleType, PreferenceIndicatorVector, SpaceAttributes};
use crate::domain::recommendation::{PrioritySpace, RecommendedProcess};

/// Upper bound on returned scenarios.
pub const MAX_SCENARIOS: usize = 5;

/// Thresholds for household facts inferred from indicators.
pub const KIDS_INFERRED_AT: u8 = 60;
pub const PETS_INFERRED_AT: u8 = 30;
pub const LARGE_FAMILY_INFERRED_AT: u8 = 70;

const MARGIN_STEP: f64 = 5.0;
const MARGIN_CAP: f64 = 10.0;
const LIFESTYLE_BONUS: f64 = 20.0;
const SPACE_OVERLAP_BONUS: f64 = 10.0;
const PROCESS_OVERLAP_BONUS: f64 = 5.0;

/// Everything a scenario can be conditioned on.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioContext<'a> {
    pub indicators: &'a PreferenceIndicatorVector,
    pub lifestyle: LifestyleType,
    pub space: &'a SpaceAttributes,
    pub priority_spaces: &'a [PrioritySpace],
    pub processes: &'a [RecommendedProcess],
}

impl ScenarioContext<'_> {
    /// Inferred from family impact, not from the household flags.
    pub fn has_kids(&self) -> bool {
        self.indicators.family_impact.value() >= KIDS_INFERRED_AT
    }

    /// Inferred from pet impact, not from the household flags.
    pub fn has_pets(&self) -> bool {
        self.indicators.pet_impact.value() >= PETS_INFERRED_AT
    }

    pub fn family_size(&self) -> u8 {
        self.space.total_people.unwrap_or(
            if self.indicators.family_impact.value() >= LARGE_FAMILY_INFERRED_AT {
                4
            } else {
                2
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedScenario {
    pub id: String,
    pub category: String,
    pub title: String,
    pub narrative: ScenarioNarrative,
    pub key_points: Vec<String>,
    pub score: u32,
}

pub struct ScenarioMatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> ScenarioMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns at most [`MAX_SCENARIOS`] matching templates, best first.
    /// Equal scores keep catalog order.
    pub fn match_scenarios(&self, ctx: &ScenarioContext<'_>) -> Vec<MatchedScenario> {
        let spaces: BTreeSet<&str> = ctx
            .priority_spaces
            .iter()
            .map(|s| self.catalog.canonical_space_id(&s.space_id))
            .collect();
        let processes: BTreeSet<&str> = ctx.processes.iter().map(|p| p.id.as_str()).collect();

        let mut matched: Vec<MatchedScenario> = self
            .catalog
            .scenarios
            .iter()
            .filter(|t| matches(t, ctx))
            .map(|t| MatchedScenario {
                id: t.id.clone(),
                category: t.category.clone(),
                title: t.title.clone(),
                narrative: t.narrative.clone(),
                key_points: t.key_points.clone(),
                score: self.relevance(t, ctx, &spaces, &processes),
            })
            .collect();

        matched.sort_by(|a, b| b.score.cmp(&a.score));
        matched.truncate(MAX_SCENARIOS);

        tracing::debug!(
            candidates = self.catalog.scenarios.len(),
            matched = matched.len(),
            "scenarios matched"
        );
        matched
    }

    fn relevance(
        &self,
        template: &ScenarioTemplate,
        ctx: &ScenarioContext<'_>,
        spaces: &BTreeSet<&str>,
        processes: &BTreeSet<&str>,
    ) -> u32 {
        let mut score = 0.0;

        for (indicator, range) in &template.conditions.indicators {
            if let Some(min) = range.min {
                let margin = f64::from(value_of(ctx.indicators, *indicator).saturating_sub(min));
                score += (margin / MARGIN_STEP).min(MARGIN_CAP);
            }
        }

        if template.conditions.lifestyle.contains(&ctx.lifestyle) {
            score += LIFESTYLE_BONUS;
        }

        let overlapping_spaces = template
            .priority_spaces
            .iter()
            .map(|id| self.catalog.canonical_space_id(id))
            .collect::<BTreeSet<_>>()
            .intersection(spaces)
            .count();
        score += SPACE_OVERLAP_BONUS * overlapping_spaces as f64;

        let overlapping_processes = template
            .priority_processes
            .iter()
            .filter(|id| processes.contains(id.as_str()))
            .count();
        score += PROCESS_OVERLAP_BONUS * overlapping_processes as f64;

        score.round() as u32
    }
}

fn value_of(indicators: &PreferenceIndicatorVector, indicator: Indicator) -> u8 {
    indicators.get(indicator).value()
}

fn matches(template: &ScenarioTemplate, ctx: &ScenarioContext<'_>) -> bool {
    let conditions = &template.conditions;

    let indicators_hold = conditions
        .indicators
        .iter()
        .all(|(indicator, range)| range.contains(value_of(ctx.indicators, *indicator)));
    if !indicators_hold {
        return false;
    }
    if !conditions.lifestyle.is_empty() && !conditions.lifestyle.contains(&ctx.lifestyle) {
        return false;
    }
    if conditions.has_kids.is_some_and(|wanted| wanted != ctx.has_kids()) {
        return false;
    }
    if conditions.has_pets.is_some_and(|wanted| wanted != ctx.has_pets()) {
        return false;
    }
    if let Some(range) = conditions.family_size {
        if !range.contains(ctx.family_size()) {
            return false;
        }
    }
    true
}
