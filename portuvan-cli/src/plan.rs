//! Plan command implementation for the PortuVan CLI.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use portuvan_core::{PreferenceMode, RouteSegment, RouteSegmentProvider, RoutingError, Trip};
use portuvan_data::routing::{OsrmRouteProvider, OsrmRouteProviderConfig};
use portuvan_planner::{ItineraryGenerator, PlannerConfig, SeededChooser, TripPlanner};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_OFFLINE, ARG_OSRM_BASE_URL, ARG_PREFERENCE, ARG_ROUTING_TIMEOUT_SECS,
    ARG_SEED, CliError, ENV_PLAN_DATASET, load_scored, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score the dataset, sample one stop per region between \
                 Lisbon and Porto, and resolve every driving leg through \
                 OSRM. Legs that cannot be routed are drawn as straight \
                 lines with zero distance.",
    about = "Generate a road trip",
    name = "plan"
)]
#[ortho_config(prefix = "PORTUVAN")]
pub(crate) struct PlanArgs {
    /// Path to the CSV location dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Travel preference: balanced, wild, or popular.
    #[arg(long = ARG_PREFERENCE, value_name = "mode")]
    #[serde(default)]
    pub(crate) preference: Option<String>,
    /// Seed for reproducible stop sampling.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Per-leg routing timeout in seconds.
    #[arg(long = ARG_ROUTING_TIMEOUT_SECS, value_name = "n")]
    #[serde(default)]
    pub(crate) routing_timeout_secs: Option<u64>,
    /// Skip routing and connect stops with straight lines.
    #[arg(long = ARG_OFFLINE)]
    #[serde(default)]
    pub(crate) offline: bool,
}

impl PlanArgs {
    fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Where driving legs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteSource {
    /// Never route; every leg degrades to a straight connector.
    Offline,
    /// Query an OSRM service.
    Osrm { base_url: String, timeout: Duration },
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) preference: PreferenceMode,
    pub(crate) seed: Option<u64>,
    pub(crate) routing: RouteSource,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_PLAN_DATASET,
        })?;
        let preference = args
            .preference
            .as_deref()
            .map_or_else(PreferenceMode::default, PreferenceMode::from_label);
        let routing = if args.offline {
            RouteSource::Offline
        } else {
            let defaults = OsrmRouteProviderConfig::default();
            let timeout = match args.routing_timeout_secs {
                Some(0) => {
                    return Err(CliError::ZeroValue {
                        field: ARG_ROUTING_TIMEOUT_SECS,
                    });
                }
                Some(secs) => Duration::from_secs(secs),
                None => defaults.timeout,
            };
            RouteSource::Osrm {
                base_url: args.osrm_base_url.unwrap_or(defaults.base_url),
                timeout,
            }
        };
        Ok(Self {
            dataset,
            preference,
            seed: args.seed,
            routing,
        })
    }
}

/// Route provider that reports every leg as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OfflineRouteProvider;

impl RouteSegmentProvider for OfflineRouteProvider {
    fn resolve_segment(
        &self,
        _start: Coord<f64>,
        _end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        Err(RoutingError::Network {
            url: "offline://".to_owned(),
            message: "routing disabled".to_owned(),
        })
    }
}

/// Builds the route provider for the current plan invocation.
pub(crate) trait RouteProviderBuilder {
    fn build(&self, source: &RouteSource) -> Result<Box<dyn RouteSegmentProvider>, CliError>;
}

pub(crate) struct DefaultRouteProviderBuilder;

impl RouteProviderBuilder for DefaultRouteProviderBuilder {
    fn build(&self, source: &RouteSource) -> Result<Box<dyn RouteSegmentProvider>, CliError> {
        match source {
            RouteSource::Offline => Ok(Box::new(OfflineRouteProvider)),
            RouteSource::Osrm { base_url, timeout } => {
                let config = OsrmRouteProviderConfig::new(base_url.clone()).with_timeout(*timeout);
                let provider = OsrmRouteProvider::with_config(config).map_err(|source| {
                    CliError::BuildRouteProvider {
                        base_url: base_url.clone(),
                        source,
                    }
                })?;
                Ok(Box::new(provider))
            }
        }
    }
}

/// JSON document printed by `plan`.
#[derive(Debug, Serialize)]
pub(crate) struct PlanOutput {
    pub(crate) preference: PreferenceMode,
    pub(crate) seed: Option<u64>,
    pub(crate) trip: Trip,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultRouteProviderBuilder, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn RouteProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let output = execute_plan(&config, builder)?;
    write_json(writer, &output)
}

pub(crate) fn execute_plan(
    config: &PlanConfig,
    builder: &dyn RouteProviderBuilder,
) -> Result<PlanOutput, CliError> {
    let scored = load_scored(&config.dataset)?;
    let generator = ItineraryGenerator::new(PlannerConfig::default())?;
    let provider = builder.build(&config.routing)?;
    let planner = TripPlanner::with_generator(generator, provider);
    let mut chooser = config
        .seed
        .map_or_else(SeededChooser::from_entropy, SeededChooser::from_seed);
    log::info!(
        "planning {} trip from {} scored locations",
        config.preference,
        scored.len()
    );
    let trip = planner.plan(&scored, config.preference, &mut chooser);
    Ok(PlanOutput {
        preference: config.preference,
        seed: config.seed,
        trip,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
