//! Catalog loading and semantic validation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Catalog;

const EMBEDDED_CATALOG: &str = include_str!("default_catalog.yaml");

/// Errors raised while loading static tables. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog entry: {0}")]
    Invalid(String),
}

impl CatalogError {
    fn invalid(msg: impl Into<String>) -> Self {
        CatalogError::Invalid(msg.into())
    }
}

impl Catalog {
    /// Parses the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml_str(EMBEDDED_CATALOG)
    }

    /// Reads and validates a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded catalog override");
        Ok(catalog)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Uses `path` when given, otherwise the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (question, answers) in &self.answer_mappings {
            for (answer, impacts) in answers {
                if let Some(bad) = impacts.iter().find(|i| !(1..=10).contains(&i.score)) {
                    return Err(CatalogError::invalid(format!(
                        "answer mapping {question}/{answer}: score {} outside 1..=10",
                        bad.score
                    )));
                }
            }
        }

        for (space_id, space) in &self.spaces {
            for (indicator, weight) in &space.weights {
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(CatalogError::invalid(format!(
                        "space {space_id}: weight for {indicator} must be finite and non-negative"
                    )));
                }
            }
            for rule in &space.processes {
                if rule.min_score > 100 {
                    return Err(CatalogError::invalid(format!(
                        "process rule {}: min_score above 100",
                        rule.id
                    )));
                }
                if let Some(at) = rule.essential_at {
                    if at > 100 || at < rule.min_score {
                        return Err(CatalogError::invalid(format!(
                            "process rule {}: essential_at must lie in min_score..=100",
                            rule.id
                        )));
                    }
                }
            }
        }

        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if !seen.insert(scenario.id.as_str()) {
                return Err(CatalogError::invalid(format!(
                    "duplicate scenario id {}",
                    scenario.id
                )));
            }
            scenario
                .conditions
                .check_ranges()
                .map_err(|reason| CatalogError::invalid(format!("scenario {}: {reason}", scenario.id)))?;
        }

        for (question, answers) in &self.choice_answers {
            for (answer, partial) in answers {
                if partial.lock_strength.is_some_and(|v| v > 100) {
                    return Err(CatalogError::invalid(format!(
                        "choice answer {question}/{answer}: lock_strength above 100"
                    )));
                }
            }
        }

        if self.high_cost_threshold == 0 {
            return Err(CatalogError::invalid("high_cost_threshold must be positive"));
        }

        Ok(())
    }
}
