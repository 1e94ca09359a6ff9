//! Priority space ranking.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Catalog, DEFAULT_SPACE_BONUS};
use crate::domain::foundation::Score;
use crate::domain::profile::PreferenceIndicatorVector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritySpace {
    pub space_id: String,
    pub label: String,
    pub rank: usize,
    pub score: Score,
    pub rationale: String,
}

/// Scores each selected space and ranks them, highest first.
///
/// Aliases collapse onto their canonical id; the first occurrence wins.
pub fn rank_spaces(
    catalog: &Catalog,
    indicators: &PreferenceIndicatorVector,
    selected_spaces: &[String],
) -> Vec<PrioritySpace> {
    let mut scored: Vec<PrioritySpace> = Vec::new();

    for requested in selected_spaces {
        let (space_id, label, score, rationale) = match catalog.space(requested) {
            Some((id, def)) if !def.weights.is_empty() => {
                let weighted: f64 = def
                    .weights
                    .iter()
                    .map(|(indicator, w)| w * indicators.get(*indicator).as_f64())
                    .sum();
                let strongest = def
                    .weights
                    .iter()
                    .map(|(indicator, w)| (*indicator, w * indicators.get(*indicator).as_f64()))
                    .max_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(indicator, _)| indicator.area_label());
                let rationale = match strongest {
                    Some(area) => format!("Driven mainly by your {area} profile."),
                    None => String::new(),
                };
                (id.to_string(), def.label.clone(), 50.0 + weighted, rationale)
            }
            Some((id, def)) => (
                id.to_string(),
                def.label.clone(),
                50.0 + DEFAULT_SPACE_BONUS,
                "Selected for renovation.".to_string(),
            ),
            None => {
                tracing::warn!(space_id = %requested, "unknown space id, using default bonus");
                (
                    requested.clone(),
                    requested.clone(),
                    50.0 + DEFAULT_SPACE_BONUS,
                    "Selected for renovation.".to_string(),
                )
            }
        };

        if scored.iter().any(|s| s.space_id == space_id) {
            continue;
        }
        scored.push(PrioritySpace {
            space_id,
            label,
            rank: 0,
            score: Score::from_f64(score),
            rationale,
        });
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    for (i, space) in scored.iter_mut().enumerate() {
        space.rank = i + 1;
    }
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Indicator;

    fn ids(spaces: &[PrioritySpace]) -> Vec<&str> {
        spaces.iter().map(|s| s.space_id.as_str()).collect()
    }

    fn selected(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn kitchen_score_uses_weights() {
        let catalog = Catalog::embedded().unwrap();
        let v = PreferenceIndicatorVector::neutral()
            .with(Indicator::FlowImportance, 80)
            .with(Indicator::StorageImportance, 60);
        // 50 + 0.4*80 + 0.3*60 + 0.2*50 = 110 -> capped
        let spaces = rank_spaces(&catalog, &v, &selected(&["kitchen"]));
        assert_eq!(spaces[0].score, Score::MAX);

        let neutral = PreferenceIndicatorVector::neutral();
        // 50 + 0.9*50 = 95
        let spaces = rank_spaces(&catalog, &neutral, &selected(&["kitchen"]));
        assert_eq!(spaces[0].score.value(), 95);
    }

    #[test]
    fn ranks_descending_and_numbers_from_one() {
        let catalog = Catalog::embedded().unwrap();
        let v = PreferenceIndicatorVector::neutral()
            .with(Indicator::MaintenanceSensitivity, 10)
            .with(Indicator::ConstructionTolerance, 10);
        // bathroom: 50 + 4 + 3 = 57; living: 50 + 0.7*50 = 85
        let spaces = rank_spaces(&catalog, &v, &selected(&["bathroom", "living"]));
        assert_eq!(ids(&spaces), vec!["living", "bathroom"]);
        assert_eq!(spaces[0].rank, 1);
        assert_eq!(spaces[1].rank, 2);
        assert_eq!(spaces[1].score.value(), 57);
    }

    #[test]
    fn aliases_collapse_to_canonical_id() {
        let catalog = Catalog::embedded().unwrap();
        let v = PreferenceIndicatorVector::neutral();
        let spaces = rank_spaces(&catalog, &v, &selected(&["주방", "kitchen", "room1", "room2"]));
        assert_eq!(ids(&spaces).len(), 2);
        assert!(ids(&spaces).contains(&"kitchen"));
        assert!(ids(&spaces).contains(&"room"));
    }

    #[test]
    fn unknown_space_gets_default_bonus() {
        let catalog = Catalog::embedded().unwrap();
        let spaces = rank_spaces(
            &catalog,
            &PreferenceIndicatorVector::neutral(),
            &selected(&["garage"]),
        );
        assert_eq!(spaces[0].score, Score::MAX);
        assert_eq!(spaces[0].label, "garage");
    }

    #[test]
    fn empty_selection_yields_no_spaces() {
        let catalog = Catalog::embedded().unwrap();
        assert!(rank_spaces(&catalog, &PreferenceIndicatorVector::neutral(), &[]).is_empty());
    }
}
