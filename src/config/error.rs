//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Narration timeout must be between 1 and 120 seconds, got {0}")]
    InvalidNarrationTimeout(u64),

    #[error("Catalog override not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
