//! What a narrator is allowed to see.

use serde::{Deserialize, Serialize};

use super::Tone;
use crate::domain::intervention::ProcessWarning;
use crate::domain::profile::IndicatorProfile;
use crate::domain::recommendation::{Grade, PrioritySpace, RecommendedProcess};
use crate::domain::risk::Risk;
use crate::domain::scenario::MatchedScenario;

/// Read-only snapshot of an analysis for narration. Any list may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationContext {
    pub tone: Tone,
    pub profile: IndicatorProfile,
    pub priority_spaces: Vec<PrioritySpace>,
    pub processes: Vec<RecommendedProcess>,
    pub grade: Grade,
    pub warnings: Vec<ProcessWarning>,
    pub risks: Vec<Risk>,
    pub scenarios: Vec<MatchedScenario>,
}
