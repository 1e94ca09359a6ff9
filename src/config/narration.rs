//! Narration configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Narration configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NarrationConfig {
    /// Deadline for the primary narrator before the template is used
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// When false, only the template narrator runs
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl NarrationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate narration configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidNarrationTimeout(self.timeout_secs));
        }
        Ok(())
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            enabled: default_enabled(),
        }
    }
}

fn default_timeout() -> u64 {
    20
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_config_defaults() {
        let config = NarrationConfig::default();
        assert_eq!(config.timeout_secs, 20);
        assert!(config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = NarrationConfig {
            timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_validation_timeout_bounds() {
        for (secs, ok) in [(0, false), (1, true), (120, true), (121, false)] {
            let config = NarrationConfig {
                timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "timeout {secs}");
        }
    }
}
