//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A bounded score between 0 and 100 inclusive.
///
/// Every indicator and judgment axis is a `Score`. Arithmetic on scores
/// saturates at the bounds instead of failing. Decoding is strict: a
/// serialized value outside 0-100 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Neutral starting point for every indicator.
    pub const NEUTRAL: Self = Self(50);

    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Creates a new Score, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Score from any signed value, clamping to 0-100.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a Score from a float, rounding half away from zero before clamping.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value widened for signed arithmetic.
    pub fn as_i32(&self) -> i32 {
        i32::from(self.0)
    }

    /// Returns the value as f64.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Applies a signed delta and clamps the result.
    pub fn shifted(self, delta: i32) -> Self {
        Self::clamped(self.as_i32().saturating_add(delta))
    }

    /// Returns `100 - self`.
    pub fn inverted(self) -> Self {
        Self(100 - self.0)
    }

    /// Coarse interpretation band used by the grade table.
    pub fn level(self) -> ScoreLevel {
        match self.0 {
            0..=33 => ScoreLevel::Low,
            34..=66 => ScoreLevel::Medium,
            _ => ScoreLevel::High,
        }
    }
}

impl TryFrom<i32> for Score {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three-way banding of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Low,
    Medium,
    High,
}
