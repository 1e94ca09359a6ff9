//! AnalyzeHouseholdHandler - Runs the full inference pipeline for one request.
//!
//! answers + household → indicator engine → recommender (with selection
//! feedback) → judgment axes → intervention → {risks, scenarios} → bundle.
//! Every stage after the recommender reads the adjusted indicators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::axes::{AxisSource, JudgmentAxes};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{AnalysisId, Timestamp};
use crate::domain::intervention::{
    ChoiceVariables, InterventionEngine, InterventionOutcome, ProcessOption, ReducedChoices,
};
use crate::domain::narrative::{NarrationContext, Tone};
use crate::domain::profile::{IndicatorEngine, IndicatorProfile, SpaceAttributes, VibeInput};
use crate::domain::recommendation::{
    BudgetRange, Grade, Recommendation, RecommendedProcess, SpaceProcessRecommender,
};
use crate::domain::risk::{detect_risks, Risk};
use crate::domain::scenario::{MatchedScenario, ScenarioContext, ScenarioMatcher};

/// One analysis request, usually read from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeHouseholdCommand {
    /// Question id → answer value. `"skip"` answers are ignored.
    pub answers: BTreeMap<String, String>,
    pub household: SpaceAttributes,
    pub vibe: Option<VibeInput>,
    /// Space ids or aliases picked by the customer.
    pub selected_spaces: Vec<String>,
    /// Process ids picked by the customer.
    pub selected_processes: Vec<String>,
    pub budget: Option<BudgetRange>,
    /// Explicit choice variables. When absent they are aggregated from the
    /// judgment answers, if any.
    pub choice_variables: Option<ChoiceVariables>,
    /// Candidate options per process id.
    pub option_lists: BTreeMap<String, Vec<ProcessOption>>,
}

/// Everything the pipeline produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub id: AnalysisId,
    pub created_at: Timestamp,
    /// Indicator engine output, before selection feedback.
    pub profile: IndicatorProfile,
    pub recommendation: Recommendation,
    pub axes: JudgmentAxes,
    pub intervention: InterventionOutcome,
    pub risks: Vec<Risk>,
    pub scenarios: Vec<MatchedScenario>,
    pub tone: Tone,
}

/// Read-only view handed to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatorInput<'a> {
    pub processes: &'a [RecommendedProcess],
    pub grade: Grade,
    pub option_lists: &'a BTreeMap<String, ReducedChoices>,
}

impl AnalysisBundle {
    /// Final processes, grade and reduced option lists.
    pub fn estimator_input(&self) -> EstimatorInput<'_> {
        EstimatorInput {
            processes: &self.intervention.processes,
            grade: self.recommendation.grade,
            option_lists: &self.intervention.option_lists,
        }
    }

    /// Snapshot for narration, carrying the adjusted indicators and the
    /// final process list.
    pub fn narration_context(&self) -> NarrationContext {
        let mut profile = self.profile.clone();
        profile.indicators = self.recommendation.adjusted_indicators;

        NarrationContext {
            tone: self.tone,
            profile,
            priority_spaces: self.recommendation.priority_spaces.clone(),
            processes: self.intervention.processes.clone(),
            grade: self.recommendation.grade,
            warnings: self.intervention.warnings.clone(),
            risks: self.risks.clone(),
            scenarios: self.scenarios.clone(),
        }
    }
}

/// Handler for household analysis.
///
/// Holds the shared catalog; safe to call from many tasks at once.
#[derive(Debug, Clone)]
pub struct AnalyzeHouseholdHandler {
    catalog: Arc<Catalog>,
}

impl AnalyzeHouseholdHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs every stage. Never fails: unknown data is skipped and values clamp.
    pub fn handle(&self, cmd: &AnalyzeHouseholdCommand) -> AnalysisBundle {
        let started = Instant::now();
        let id = AnalysisId::new();
        let catalog = self.catalog.as_ref();

        // 1. Answers to indicators
        let profile =
            IndicatorEngine::new(catalog).analyze(&cmd.answers, &cmd.household, cmd.vibe.as_ref());

        // 2. Spaces, processes and selection feedback
        let recommendation = SpaceProcessRecommender::new(catalog).recommend(
            &profile.indicators,
            &cmd.selected_spaces,
            &cmd.selected_processes,
            cmd.budget,
        );
        let adjusted = &recommendation.adjusted_indicators;

        // 3. Judgment axes and intervention
        let axes = adjusted.judgment_axes();
        let choice_variables = cmd
            .choice_variables
            .or_else(|| ChoiceVariables::aggregate(catalog, &cmd.answers));
        let intervention = InterventionEngine::new(catalog).analyze(
            &recommendation.processes,
            &axes,
            choice_variables,
            &cmd.option_lists,
        );

        // 4. Risks over the final plan, scenarios over the recommendation
        let risks = detect_risks(
            adjusted,
            &intervention.processes,
            &recommendation.priority_spaces,
            &cmd.household,
        );
        let scenarios = ScenarioMatcher::new(catalog).match_scenarios(&ScenarioContext {
            indicators: adjusted,
            lifestyle: profile.lifestyle,
            space: &cmd.household,
            priority_spaces: &recommendation.priority_spaces,
            processes: &recommendation.processes,
        });
        let tone = Tone::select(adjusted);

        tracing::info!(
            analysis_id = %id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            level = %intervention.level,
            processes = intervention.processes.len(),
            risks = risks.len(),
            scenarios = scenarios.len(),
            "household analysis complete"
        );

        AnalysisBundle {
            id,
            created_at: Timestamp::now(),
            profile,
            recommendation,
            axes,
            intervention,
            risks,
            scenarios,
            tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intervention::ReductionPath;

    fn handler() -> AnalyzeHouseholdHandler {
        AnalyzeHouseholdHandler::new(Arc::new(Catalog::embedded().unwrap()))
    }

    #[test]
    fn empty_request_yields_neutral_bundle() {
        let bundle = handler().handle(&AnalyzeHouseholdCommand::default());
        assert!(bundle.profile.keywords.is_empty());
        assert!(bundle.intervention.path.is_axis_driven());
        assert!(bundle.scenarios.len() <= 5);
        assert!(bundle.risks.iter().any(|r| r.id == "insufficient_processes"));
    }

    #[test]
    fn explicit_choice_variables_win_over_answers() {
        let cmd = AnalyzeHouseholdCommand {
            choice_variables: Some(ChoiceVariables::default()),
            ..Default::default()
        };
        let bundle = handler().handle(&cmd);
        assert!(matches!(bundle.intervention.path, ReductionPath::ChoiceVariables { .. }));
    }

    #[test]
    fn narration_context_uses_adjusted_indicators_and_final_processes() {
        let cmd = AnalyzeHouseholdCommand {
            selected_spaces: vec!["kitchen".to_string()],
            selected_processes: vec!["kitchen_layout".to_string()],
            ..Default::default()
        };
        let bundle = handler().handle(&cmd);
        let ctx = bundle.narration_context();
        assert_eq!(ctx.profile.indicators, bundle.recommendation.adjusted_indicators);
        assert_eq!(ctx.processes, bundle.intervention.processes);
        assert_eq!(ctx.tone, bundle.tone);
    }

    #[test]
    fn estimator_input_exposes_final_plan() {
        let bundle = handler().handle(&AnalyzeHouseholdCommand::default());
        let input = bundle.estimator_input();
        assert_eq!(input.processes.len(), bundle.intervention.processes.len());
        assert_eq!(input.grade, bundle.recommendation.grade);
    }

    #[test]
    fn command_reads_from_json() {
        let json = r#"{
            "answers": {"quick_first_scene": "skip"},
            "household": {"total_people": 4, "age_ranges": ["0-5"]},
            "selected_spaces": ["거실"],
            "budget": "low"
        }"#;
        let cmd: AnalyzeHouseholdCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd.household.total_people, Some(4));
        assert_eq!(cmd.budget, Some(BudgetRange::Low));
        assert!(cmd.choice_variables.is_none());
    }

    #[test]
    fn command_rejects_lock_strength_above_scale() {
        let json = r#"{
            "choice_variables": {"option_count": 2, "lock_strength": 250, "default_plan": true}
        }"#;
        let err = serde_json::from_str::<AnalyzeHouseholdCommand>(json).unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn command_accepts_lock_strength_at_scale_bound() {
        let json = r#"{
            "choice_variables": {"option_count": 2, "lock_strength": 100, "default_plan": true}
        }"#;
        let cmd: AnalyzeHouseholdCommand = serde_json::from_str(json).unwrap();
        let cv = cmd.choice_variables.unwrap();
        assert_eq!(cv.lock_strength.inverted().value(), 0);
    }
}
