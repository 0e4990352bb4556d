//! Error types emitted by the PortuVan CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use portuvan_core::UnknownCategory;
use portuvan_data::DatasetError;
use portuvan_data::routing::ProviderBuildError;
use portuvan_planner::PlannerConfigError;
use portuvan_scorer::UnknownHeatMetric;
use thiserror::Error;

/// Errors emitted by the PortuVan CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A numeric option is out of range.
    #[error("{field} must be at least 1")]
    ZeroValue { field: &'static str },
    /// The heat metric label was not recognised.
    #[error(transparent)]
    HeatMetric(#[from] UnknownHeatMetric),
    /// A `--category` label was not recognised.
    #[error(transparent)]
    Category(#[from] UnknownCategory),
    /// Loading the location dataset failed.
    #[error("failed to load dataset {path:?}: {source}")]
    Dataset {
        path: Utf8PathBuf,
        #[source]
        source: DatasetError,
    },
    /// The planner configuration was rejected.
    #[error(transparent)]
    Planner(#[from] PlannerConfigError),
    /// Constructing the route provider failed.
    #[error("failed to build route provider for {base_url:?}: {source}")]
    BuildRouteProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
