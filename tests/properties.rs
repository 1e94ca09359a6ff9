//! Property tests over the inference stages.

use std::collections::BTreeMap;

use proptest::prelude::*;

use renovation_advisor::domain::axes::{AxisSource, InterventionLevel, JudgmentAxes};
use renovation_advisor::domain::catalog::Catalog;
use renovation_advisor::domain::foundation::Score;
use renovation_advisor::domain::intervention::{reduce_processes, ReductionPath};
use renovation_advisor::domain::profile::{
    CategoryScores, Indicator, IndicatorEngine, LifestyleType, PreferenceCategory,
    PreferenceIndicatorVector, SpaceAttributes, VibeInput,
};
use renovation_advisor::domain::recommendation::{ProcessPriority, RecommendedProcess};
use renovation_advisor::domain::scenario::{ScenarioContext, ScenarioMatcher, MAX_SCENARIOS};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog must load")
}

/// Every (question, answer) pair the embedded catalog knows, plus noise.
fn known_answers(catalog: &Catalog) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (q, answers) in &catalog.answer_mappings {
        pairs.extend(answers.keys().map(|a| (q.clone(), a.clone())));
    }
    for (q, answers) in &catalog.question_criteria {
        pairs.extend(answers.keys().map(|a| (q.clone(), a.clone())));
    }
    pairs.push(("unknown_question".to_string(), "unknown".to_string()));
    pairs
}

fn indicator_vector() -> impl Strategy<Value = PreferenceIndicatorVector> {
    prop::collection::vec(0u8..=100, Indicator::ALL.len()).prop_map(|values| {
        Indicator::ALL
            .iter()
            .zip(values)
            .fold(PreferenceIndicatorVector::neutral(), |v, (i, score)| {
                v.with(*i, score)
            })
    })
}

fn axes() -> impl Strategy<Value = JudgmentAxes> {
    (0u8..=100, 0u8..=100, 0u8..=100, 0u8..=100)
        .prop_map(|(c, r, d, n)| JudgmentAxes::new(c, r, d, n))
}

fn processes() -> impl Strategy<Value = Vec<RecommendedProcess>> {
    let ids = [
        "kitchen_layout",
        "closet_builtin",
        "demolition",
        "finish",
        "film",
        "bathroom_easy_clean",
        "living_lighting",
        "electric",
    ];
    prop::sample::subsequence(ids.to_vec(), 0..=ids.len()).prop_flat_map(|chosen| {
        let n = chosen.len();
        (
            Just(chosen),
            prop::collection::vec((0usize..3, 0u8..=100), n),
        )
            .prop_map(|(chosen, attrs)| {
                chosen
                    .into_iter()
                    .zip(attrs)
                    .map(|(id, (priority, score))| RecommendedProcess {
                        id: id.to_string(),
                        label: id.replace('_', " "),
                        category: "test".to_string(),
                        priority: [
                            ProcessPriority::Essential,
                            ProcessPriority::Recommended,
                            ProcessPriority::Optional,
                        ][priority],
                        score: Score::new(score),
                        rationale: String::new(),
                        cost_estimate: None,
                    })
                    .collect()
            })
    })
}

proptest! {
    #[test]
    fn indicators_and_axes_stay_in_range(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..25),
        people in prop::option::of(0u8..12),
        pyeong in prop::option::of(0.0f64..80.0),
        mbti in prop::option::of("[EI][NS][TF][JP]"),
    ) {
        let catalog = catalog();
        let pool = known_answers(&catalog);
        let answers: BTreeMap<String, String> =
            picks.iter().map(|ix| pool[ix.index(pool.len())].clone()).collect();
        let space = SpaceAttributes {
            total_people: people,
            pyeong,
            ..Default::default()
        };
        let vibe = mbti.map(VibeInput::mbti);

        let profile = IndicatorEngine::new(&catalog).analyze(&answers, &space, vibe.as_ref());
        for (_, score) in profile.indicators.iter() {
            prop_assert!(score.value() <= 100);
        }
        let axes = profile.indicators.judgment_axes();
        for axis in [axes.cost_sensitivity, axes.risk_aversion, axes.decision_drag, axes.control_need] {
            prop_assert!(axis.value() <= 100);
        }
        prop_assert!(profile.keywords.len() <= 7);
        prop_assert!(profile.priority_areas.len() <= 3);
    }

    #[test]
    fn more_budget_elasticity_never_raises_cost_sensitivity(
        v in indicator_vector(),
        low in 0u8..=100,
        high in 0u8..=100,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let a = v.with(Indicator::BudgetElasticity, low).judgment_axes();
        let b = v.with(Indicator::BudgetElasticity, high).judgment_axes();
        prop_assert!(b.cost_sensitivity <= a.cost_sensitivity);
    }

    #[test]
    fn more_budget_sense_never_raises_cost_sensitivity(low in 1.0f64..=10.0, high in 1.0f64..=10.0) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let a = CategoryScores::default().with(PreferenceCategory::BudgetSense, low).judgment_axes();
        let b = CategoryScores::default().with(PreferenceCategory::BudgetSense, high).judgment_axes();
        prop_assert!(b.cost_sensitivity <= a.cost_sensitivity);
    }

    #[test]
    fn axis_reduction_yields_a_subset(list in processes(), axes in axes()) {
        let catalog = catalog();
        let path = ReductionPath::resolve(axes.intervention_level(), None);
        let (kept, summary) = reduce_processes(&catalog, &list, &axes, &path);
        for p in &kept {
            prop_assert!(list.iter().any(|o| o.id == p.id));
        }
        prop_assert_eq!(summary.original_count, list.len());
        prop_assert_eq!(summary.reduced_count, kept.len());
        prop_assert_eq!(summary.removed.len(), list.len() - kept.len());
    }

    #[test]
    fn intervention_level_depends_on_axes_alone(axes in axes(), other_cost in 0u8..=100) {
        let first = InterventionLevel::from_axes(&axes);
        prop_assert_eq!(first, InterventionLevel::from_axes(&axes));

        let points = InterventionLevel::points(&axes);
        prop_assert!((3..=9).contains(&points));

        let mut shifted = axes;
        shifted.cost_sensitivity = Score::new(other_cost);
        prop_assert_eq!(first, InterventionLevel::from_axes(&shifted));
    }

    #[test]
    fn scenario_results_are_bounded_and_sorted(
        v in indicator_vector(),
        lifestyle in prop::sample::select(vec![
            LifestyleType::Morning,
            LifestyleType::Evening,
            LifestyleType::Weekend,
            LifestyleType::Focus,
            LifestyleType::General,
        ]),
        people in prop::option::of(1u8..8),
    ) {
        let catalog = catalog();
        let space = SpaceAttributes { total_people: people, ..Default::default() };
        let matched = ScenarioMatcher::new(&catalog).match_scenarios(&ScenarioContext {
            indicators: &v,
            lifestyle,
            space: &space,
            priority_spaces: &[],
            processes: &[],
        });
        prop_assert!(matched.len() <= MAX_SCENARIOS);
        for pair in matched.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
