//! Scenario templates and the matcher that selects the relevant ones.

mod matcher;
mod template;

pub use matcher::{
    MatchedScenario, ScenarioContext, ScenarioMatcher, KIDS_INFERRED_AT, LARGE_FAMILY_INFERRED_AT,
    MAX_SCENARIOS, PETS_INFERRED_AT,
};
pub use template::{IndicatorRange, ScenarioConditions, ScenarioNarrative, ScenarioTemplate, SizeRange};
