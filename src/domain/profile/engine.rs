//! Indicator engine: answers plus household facts to a preference profile.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Indicator, LifestyleType, PreferenceIndicatorVector, SpaceAttributes, VibeInput};
use crate::domain::catalog::Catalog;

/// Maximum number of keywords kept on a profile.
pub const MAX_KEYWORDS: usize = 7;

/// Indicators at or above this score may become priority areas.
pub const PRIORITY_AREA_THRESHOLD: u8 = 60;

/// Answer value meaning "no answer given".
pub const SKIP_ANSWER: &str = "skip";

/// Output of the indicator engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorProfile {
    pub indicators: PreferenceIndicatorVector,
    pub keywords: Vec<String>,
    pub priority_areas: Vec<String>,
    pub lifestyle: LifestyleType,
}

/// Resolves answers through the catalog and applies fixed corrections.
///
/// Never fails: unmapped answers are logged and ignored.
pub struct IndicatorEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> IndicatorEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn analyze(
        &self,
        answers: &BTreeMap<String, String>,
        space: &SpaceAttributes,
        vibe: Option<&VibeInput>,
    ) -> IndicatorProfile {
        let mut indicators = PreferenceIndicatorVector::neutral();
        let mut keywords: Vec<String> = Vec::new();
        let mut votes: Vec<LifestyleType> = Vec::new();

        for (question_id, answer) in answers {
            if answer == SKIP_ANSWER {
                continue;
            }
            match self.catalog.answer_effect(question_id, answer) {
                Some(effect) => {
                    for (indicator, delta) in effect.deltas {
                        indicators.apply(indicator, delta);
                    }
                    for keyword in effect.keywords {
                        if !keywords.contains(&keyword) {
                            keywords.push(keyword);
                        }
                    }
                    votes.extend(effect.lifestyle);
                }
                // Judgment questions only feed choice variables.
                None if self.catalog.choice_answers.contains_key(question_id) => {}
                None => {
                    tracing::warn!(
                        question_id = %question_id,
                        answer = %answer,
                        "no impact mapped for answer"
                    );
                }
            }
        }

        apply_space_corrections(&mut indicators, space);
        if let Some(vibe) = vibe {
            apply_vibe_nudges(&mut indicators, vibe);
        }

        keywords.truncate(MAX_KEYWORDS);
        let lifestyle = majority_lifestyle(&votes);
        let priority_areas = priority_areas(&indicators);

        tracing::debug!(
            answers = answers.len(),
            lifestyle = %lifestyle,
            priority_areas = priority_areas.len(),
            "indicator profile built"
        );

        IndicatorProfile {
            indicators,
            keywords,
            priority_areas,
            lifestyle,
        }
    }
}

/// Fixed offsets from household size, floor area and bathroom count.
pub fn apply_space_corrections(indicators: &mut PreferenceIndicatorVector, space: &SpaceAttributes) {
    if space.total_people.is_some_and(|n| n >= 4) {
        indicators.apply(Indicator::FamilyImpact, 10);
        indicators.apply(Indicator::StorageImportance, 10);
    }
    if space.pyeong.is_some_and(|p| p > 0.0 && p <= 20.0) {
        indicators.apply(Indicator::FlowImportance, 10);
        indicators.apply(Indicator::StorageImportance, 5);
    }
    if space.bathrooms == Some(1) {
        indicators.apply(Indicator::FlowImportance, 5);
    }
}

/// Small personality-driven nudges.
pub fn apply_vibe_nudges(indicators: &mut PreferenceIndicatorVector, vibe: &VibeInput) {
    if vibe.has_trait('J') {
        indicators.apply(Indicator::StorageImportance, 5);
        indicators.apply(Indicator::MaintenanceSensitivity, 5);
    }
    if vibe.has_trait('P') {
        indicators.apply(Indicator::StyleAttachment, 5);
    }
    if vibe.has_trait('F') {
        indicators.apply(Indicator::LightingPreference, 5);
        indicators.apply(Indicator::ColorPreference, 5);
    }
}

/// Most frequent vote; earliest vote wins a tie; `General` when empty.
fn majority_lifestyle(votes: &[LifestyleType]) -> LifestyleType {
    let mut tally: Vec<(LifestyleType, usize)> = Vec::new();
    for vote in votes {
        match tally.iter_mut().find(|(t, _)| t == vote) {
            Some((_, n)) => *n += 1,
            None => tally.push((*vote, 1)),
        }
    }
    let mut best: Option<(LifestyleType, usize)> = None;
    for (t, n) in tally {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((t, n));
        }
    }
    best.map(|(t, _)| t).unwrap_or_default()
}

fn priority_areas(indicators: &PreferenceIndicatorVector) -> Vec<String> {
    indicators
        .top(3)
        .into_iter()
        .filter(|(_, score)| score.value() >= PRIORITY_AREA_THRESHOLD)
        .map(|(indicator, _)| indicator.area_label().to_string())
        .collect()
}
