//! Which reduction mechanism is in force for a request.

use serde::{Deserialize, Serialize};

use super::ChoiceVariables;
use crate::domain::axes::InterventionLevel;

/// The two reduction mechanisms. Exactly one applies per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum ReductionPath {
    /// Thresholds on the judgment axes drive reduction.
    AxisDriven { level: InterventionLevel },
    /// Aggregated judgment answers drive reduction directly.
    ChoiceVariables { variables: ChoiceVariables },
}

impl ReductionPath {
    /// Choice variables win whenever they are present.
    pub fn resolve(level: InterventionLevel, choice_variables: Option<ChoiceVariables>) -> Self {
        match choice_variables {
            Some(variables) => ReductionPath::ChoiceVariables { variables },
            None => ReductionPath::AxisDriven { level },
        }
    }

    pub fn choice_variables(&self) -> Option<&ChoiceVariables> {
        match self {
            ReductionPath::ChoiceVariables { variables } => Some(variables),
            ReductionPath::AxisDriven { .. } => None,
        }
    }

    pub fn is_axis_driven(&self) -> bool {
        matches!(self, ReductionPath::AxisDriven { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_variables_take_precedence() {
        let cv = ChoiceVariables::default();
        let path = ReductionPath::resolve(InterventionLevel::High, Some(cv));
        assert_eq!(path.choice_variables(), Some(&cv));
        assert!(!path.is_axis_driven());
    }

    #[test]
    fn axis_path_without_choice_variables() {
        let path = ReductionPath::resolve(InterventionLevel::Mid, None);
        assert_eq!(
            path,
            ReductionPath::AxisDriven {
                level: InterventionLevel::Mid
            }
        );
    }

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_value(ReductionPath::resolve(InterventionLevel::Low, None)).unwrap();
        assert_eq!(json["path"], "axis_driven");
        assert_eq!(json["level"], "low");
    }
}
