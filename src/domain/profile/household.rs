//! Household facts that feed deterministic corrections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily-routine archetype voted for by individual answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleType {
    Morning,
    Evening,
    Weekend,
    Focus,
    #[default]
    General,
}

impl fmt::Display for LifestyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifestyleType::Morning => "morning",
            LifestyleType::Evening => "evening",
            LifestyleType::Weekend => "weekend",
            LifestyleType::Focus => "focus",
            LifestyleType::General => "general",
        };
        write!(f, "{}", s)
    }
}

/// Physical and family attributes of the home.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceAttributes {
    /// Floor area in pyeong (3.3 m²).
    pub pyeong: Option<f64>,
    pub rooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub total_people: Option<u8>,
    /// Age brackets present in the household, e.g. `"0-5"`.
    pub age_ranges: Vec<String>,
    pub has_kids: Option<bool>,
    pub has_pets: Option<bool>,
}

impl SpaceAttributes {
    pub fn has_age_range(&self, range: &str) -> bool {
        self.age_ranges.iter().any(|r| r == range)
    }
}

/// Optional personality input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibeInput {
    pub mbti: Option<String>,
}

impl VibeInput {
    pub fn mbti(code: impl Into<String>) -> Self {
        Self {
            mbti: Some(code.into()),
        }
    }

    /// True if the (case-insensitive) personality code contains `letter`.
    pub fn has_trait(&self, letter: char) -> bool {
        self.mbti
            .as_deref()
            .is_some_and(|code| code.to_ascii_uppercase().contains(letter))
    }
}
