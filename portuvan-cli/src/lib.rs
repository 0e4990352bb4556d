//! Command-line interface for planning and exploring PortuVan trips.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use portuvan_core::ScoredLocation;
use portuvan_data::load_locations;
use portuvan_scorer::{DesirabilityScorer, score_locations};
use serde::Serialize;

mod error;
mod explore;
mod plan;

pub use error::CliError;

use explore::{PicksArgs, TerritoryArgs, run_picks, run_territory};
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_PREFERENCE: &str = "preference";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_ROUTING_TIMEOUT_SECS: &str = "routing-timeout-secs";
pub(crate) const ARG_OFFLINE: &str = "offline";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_MIN_RATING: &str = "min-rating";
pub(crate) const ARG_METRIC: &str = "metric";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ENV_PLAN_DATASET: &str = "PORTUVAN_CMDS_PLAN_DATASET";
pub(crate) const ENV_PICKS_DATASET: &str = "PORTUVAN_CMDS_PICKS_DATASET";
pub(crate) const ENV_TERRITORY_DATASET: &str = "PORTUVAN_CMDS_TERRITORY_DATASET";

/// Run the PortuVan CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Picks(args) => run_picks(args),
        Command::Territory(args) => run_territory(args),
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "info" }),
    )
    .init();
}

#[derive(Debug, Parser)]
#[command(
    name = "portuvan",
    about = "Plan van road trips through Portugal from a scored location dataset",
    version
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a Lisbon to Porto trip and print it as JSON.
    Plan(PlanArgs),
    /// Print the best-ranked beaches, campsites and viewpoints.
    Picks(PicksArgs),
    /// Print location counts per region and heat-map weights.
    Territory(TerritoryArgs),
}

/// Load `path` and score every location it yields.
pub(crate) fn load_scored(path: &Utf8Path) -> Result<Vec<ScoredLocation>, CliError> {
    let dataset = load_locations(path).map_err(|source| CliError::Dataset {
        path: path.to_path_buf(),
        source,
    })?;
    if dataset.locations.is_empty() {
        log::warn!("dataset {path} contains no usable locations");
    }
    Ok(score_locations(dataset.locations, &DesirabilityScorer))
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
