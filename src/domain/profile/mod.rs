//! Preference profile - indicators, categories and the indicator engine.

mod answers;
mod categories;
mod engine;
mod household;
mod indicators;

pub use answers::{AnswerEffect, CategoryImpact, CriteriaImpact, DeltaSpec, ImpactMagnitude};
pub use categories::{CategoryScores, PreferenceCategory};
pub use engine::{
    apply_space_corrections, apply_vibe_nudges, IndicatorEngine, IndicatorProfile, MAX_KEYWORDS,
    PRIORITY_AREA_THRESHOLD, SKIP_ANSWER,
};
pub use household::{LifestyleType, SpaceAttributes, VibeInput};
pub use indicators::{Indicator, PreferenceIndicatorVector};
