//! Command-line entry point.
//!
//! Reads one analysis request as JSON from the file named by the first
//! argument, or from stdin, and prints the analysis bundle, the estimator
//! view and the narration as JSON.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use renovation_advisor::adapters::{FallbackNarrator, NarrationOutcome, NarrationSource, TemplateNarrator};
use renovation_advisor::application::{
    AnalysisBundle, AnalyzeHouseholdCommand, AnalyzeHouseholdHandler, EstimatorInput,
};
use renovation_advisor::config::{AppConfig, ConfigError, LoggingConfig};
use renovation_advisor::domain::catalog::{Catalog, CatalogError};
use renovation_advisor::domain::narrative::compose_narration;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to read request from {source_name}: {source}")]
    Input {
        source_name: String,
        source: std::io::Error,
    },

    #[error("invalid request or output JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Output<'a> {
    analysis: &'a AnalysisBundle,
    estimator_input: EstimatorInput<'a>,
    narration: &'a NarrationOutcome,
}

fn init_tracing(logging: &LoggingConfig) {
    // RUST_LOG wins over the configured filter.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_request(path: Option<PathBuf>) -> Result<AnalyzeHouseholdCommand, CliError> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(&path).map_err(|source| CliError::Input {
            source_name: path.display().to_string(),
            source,
        })?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|source| CliError::Input {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            raw
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

async fn run() -> Result<(), CliError> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging);

    let catalog = Arc::new(Catalog::load(config.catalog.path.as_deref())?);
    tracing::info!(
        spaces = catalog.spaces.len(),
        scenarios = catalog.scenarios.len(),
        overridden = config.catalog.path.is_some(),
        "catalog loaded"
    );

    let command = read_request(std::env::args_os().nth(1).map(PathBuf::from))?;
    let bundle = AnalyzeHouseholdHandler::new(catalog).handle(&command);

    let context = bundle.narration_context();
    let narration = if config.narration.enabled {
        FallbackNarrator::new(TemplateNarrator, config.narration.timeout())
            .narrate_with_source(&context)
            .await
    } else {
        NarrationOutcome {
            source: NarrationSource::Template,
            sections: compose_narration(&context),
        }
    };

    let output = Output {
        analysis: &bundle,
        estimator_input: bundle.estimator_input(),
        narration: &narration,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "analysis failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
