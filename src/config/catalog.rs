//! Static table configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the static tables come from
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// YAML document replacing the embedded tables
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if !path.is_file() => Err(ValidationError::CatalogNotFound(path.clone())),
            _ => Ok(()),
        }
    }
}
