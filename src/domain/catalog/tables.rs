//! Typed static tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::intervention::{PartialChoiceVariables, ProcessClassification};
use crate::domain::profile::{AnswerEffect, CategoryImpact, CriteriaImpact, Indicator};
use crate::domain::recommendation::CostEstimate;
use crate::domain::scenario::ScenarioTemplate;

/// Score bonus for a space that has no weight table.
pub const DEFAULT_SPACE_BONUS: f64 = 50.0;

/// Average cost above which a process counts as expensive.
pub const DEFAULT_HIGH_COST_THRESHOLD: u64 = 5_000_000;

/// Candidate process emitted when `indicator >= min_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRule {
    pub id: String,
    pub label: String,
    pub category: String,
    pub indicator: Indicator,
    pub min_score: u8,
    /// Threshold at which the process becomes essential. Without it the
    /// process is always recommended.
    #[serde(default)]
    pub essential_at: Option<u8>,
    pub rationale: String,
    #[serde(default)]
    pub cost: Option<CostEstimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceDefinition {
    pub label: String,
    #[serde(default)]
    pub weights: BTreeMap<Indicator, f64>,
    /// Alternate ids for the same space (localized ids, numbered rooms).
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub processes: Vec<ProcessRule>,
}

/// Every read-only table the pipeline consults.
///
/// Loaded once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub answer_mappings: BTreeMap<String, BTreeMap<String, Vec<CategoryImpact>>>,
    #[serde(default)]
    pub question_criteria: BTreeMap<String, BTreeMap<String, CriteriaImpact>>,
    #[serde(default)]
    pub choice_answers: BTreeMap<String, BTreeMap<String, PartialChoiceVariables>>,
    #[serde(default)]
    pub spaces: BTreeMap<String, SpaceDefinition>,
    #[serde(default)]
    pub feedback: BTreeMap<String, BTreeMap<Indicator, i32>>,
    #[serde(default)]
    pub classification: BTreeMap<String, ProcessClassification>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioTemplate>,
    #[serde(default = "default_high_cost_threshold")]
    pub high_cost_threshold: u64,
}

fn default_high_cost_threshold() -> u64 {
    DEFAULT_HIGH_COST_THRESHOLD
}

impl Catalog {
    /// A catalog with no entries. Every lookup misses.
    pub fn empty() -> Self {
        Self {
            answer_mappings: BTreeMap::new(),
            question_criteria: BTreeMap::new(),
            choice_answers: BTreeMap::new(),
            spaces: BTreeMap::new(),
            feedback: BTreeMap::new(),
            classification: BTreeMap::new(),
            scenarios: Vec::new(),
            high_cost_threshold: DEFAULT_HIGH_COST_THRESHOLD,
        }
    }

    /// Resolves an answer, preferring the generic mapping table over the
    /// question-criteria fallback.
    pub fn answer_effect(&self, question_id: &str, answer: &str) -> Option<AnswerEffect> {
        if let Some(impacts) = self
            .answer_mappings
            .get(question_id)
            .and_then(|answers| answers.get(answer))
            .filter(|impacts| !impacts.is_empty())
        {
            return Some(AnswerEffect::from(impacts.as_slice()));
        }
        self.question_criteria
            .get(question_id)
            .and_then(|answers| answers.get(answer))
            .map(AnswerEffect::from)
    }

    pub fn choice_answer(&self, question_id: &str, answer: &str) -> Option<&PartialChoiceVariables> {
        self.choice_answers
            .get(question_id)
            .and_then(|answers| answers.get(answer))
    }

    /// Looks a space up by canonical id or alias.
    pub fn space(&self, id: &str) -> Option<(&str, &SpaceDefinition)> {
        if let Some((key, def)) = self.spaces.get_key_value(id) {
            return Some((key.as_str(), def));
        }
        self.spaces
            .iter()
            .find(|(_, def)| def.aliases.iter().any(|a| a == id))
            .map(|(key, def)| (key.as_str(), def))
    }

    /// Maps any alias to its canonical space id; unknown ids pass through.
    pub fn canonical_space_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.space(id).map(|(key, _)| key).unwrap_or(id)
    }

    pub fn feedback_for(&self, process_id: &str) -> Option<&BTreeMap<Indicator, i32>> {
        self.feedback.get(process_id)
    }

    /// Classification of a process id. Unlisted processes are NARROW.
    pub fn classification_of(&self, process_id: &str) -> ProcessClassification {
        self.classification
            .get(process_id)
            .copied()
            .unwrap_or_default()
    }

    /// Finds the catalog rule that produces `process_id`, if any.
    pub fn process_rule(&self, process_id: &str) -> Option<&ProcessRule> {
        self.spaces
            .values()
            .flat_map(|space| space.processes.iter())
            .find(|rule| rule.id == process_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
