//! Dataset exploration commands: `picks` and `territory`.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use portuvan_core::{Category, ScoredLocation};
use portuvan_scorer::{
    CategoryPicks, DEFAULT_PICK_LIMIT, DashboardFilter, HeatMetric, HeatPoint, PICK_CATEGORIES,
    RegionCount, heat_points, region_breakdown, top_picks_by_category,
};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATEGORY, ARG_DATASET, ARG_LIMIT, ARG_METRIC, ARG_MIN_RATING, CliError, ENV_PICKS_DATASET,
    ENV_TERRITORY_DATASET, load_scored, write_json,
};

/// CLI arguments for the `picks` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the dataset by desirability and list the best \
                 beaches, campsites and viewpoints. Pass a minimum star \
                 rating to drop lower-rated locations before ranking.",
    about = "List top picks per category",
    name = "picks"
)]
#[ortho_config(prefix = "PORTUVAN")]
pub(crate) struct PicksArgs {
    /// Path to the CSV location dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Picks listed per category.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Only rank locations rated at least this many stars.
    #[arg(long = ARG_MIN_RATING, value_name = "stars")]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
}

impl PicksArgs {
    fn into_config(self) -> Result<PicksConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PicksConfig::try_from(merged)
    }
}

/// Resolved `picks` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PicksConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) limit: usize,
    pub(crate) filter: Option<DashboardFilter>,
}

impl TryFrom<PicksArgs> for PicksConfig {
    type Error = CliError;

    fn try_from(args: PicksArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_PICKS_DATASET,
        })?;
        let limit = args.limit.unwrap_or(DEFAULT_PICK_LIMIT);
        if limit == 0 {
            return Err(CliError::ZeroValue { field: ARG_LIMIT });
        }
        let filter = args.min_rating.map(|min_rating| {
            DashboardFilter::default()
                .with_categories(PICK_CATEGORIES)
                .with_min_rating(min_rating)
        });
        Ok(Self {
            dataset,
            limit,
            filter,
        })
    }
}

/// JSON document printed by `picks`.
#[derive(Debug, Serialize)]
pub(crate) struct PicksOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_rating: Option<f64>,
    pub(crate) categories: Vec<CategoryPicks>,
}

pub(crate) fn run_picks(args: PicksArgs) -> Result<(), CliError> {
    run_picks_with(args, &mut std::io::stdout().lock())
}

pub(crate) fn run_picks_with(args: PicksArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let output = execute_picks(&config)?;
    write_json(writer, &output)
}

pub(crate) fn execute_picks(config: &PicksConfig) -> Result<PicksOutput, CliError> {
    let scored = load_scored(&config.dataset)?;
    let Some(filter) = &config.filter else {
        return Ok(PicksOutput {
            min_rating: None,
            categories: top_picks_by_category(&scored, &PICK_CATEGORIES, config.limit),
        });
    };
    let admitted = admitted_by(filter, &scored);
    Ok(PicksOutput {
        min_rating: Some(filter.min_rating()),
        categories: top_picks_by_category(&admitted, &PICK_CATEGORIES, config.limit),
    })
}

fn admitted_by(filter: &DashboardFilter, scored: &[ScoredLocation]) -> Vec<ScoredLocation> {
    let admitted: Vec<ScoredLocation> = filter.apply(scored).into_iter().cloned().collect();
    log::debug!(
        "{} of {} locations pass the dashboard filter",
        admitted.len(),
        scored.len()
    );
    admitted
}

/// CLI arguments for the `territory` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Count locations per region and category, south to north, \
                 and weight locations for a heat map by score, review \
                 volume or rating. Repeat --category to restrict the heat \
                 map; without it every category is weighted.",
    about = "Summarise the dataset by region",
    name = "territory"
)]
#[ortho_config(prefix = "PORTUVAN")]
pub(crate) struct TerritoryArgs {
    /// Path to the CSV location dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Heat-map weight: score, reviews or rating.
    #[arg(long = ARG_METRIC, value_name = "metric")]
    #[serde(default)]
    pub(crate) metric: Option<String>,
    /// Category to include in the heat map; repeatable.
    #[arg(long = ARG_CATEGORY, value_name = "category")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) category: Vec<String>,
}

impl TerritoryArgs {
    fn into_config(self) -> Result<TerritoryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TerritoryConfig::try_from(merged)
    }
}

/// Resolved `territory` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TerritoryConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) metric: HeatMetric,
    /// Heat-map categories; empty selects every category.
    pub(crate) categories: Vec<Category>,
}

impl TryFrom<TerritoryArgs> for TerritoryConfig {
    type Error = CliError;

    fn try_from(args: TerritoryArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_TERRITORY_DATASET,
        })?;
        let metric = match args.metric {
            Some(label) => label.parse()?,
            None => HeatMetric::default(),
        };
        let mut categories = args
            .category
            .iter()
            .map(|label| label.parse())
            .collect::<Result<Vec<Category>, _>>()?;
        categories.sort_unstable();
        categories.dedup();
        Ok(Self {
            dataset,
            metric,
            categories,
        })
    }
}

/// JSON document printed by `territory`.
#[derive(Debug, Serialize)]
pub(crate) struct TerritoryOutput {
    pub(crate) metric: HeatMetric,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) categories: Vec<Category>,
    pub(crate) regions: Vec<RegionCount>,
    pub(crate) heat: Vec<HeatPoint>,
}

pub(crate) fn run_territory(args: TerritoryArgs) -> Result<(), CliError> {
    run_territory_with(args, &mut std::io::stdout().lock())
}

pub(crate) fn run_territory_with(
    args: TerritoryArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let output = execute_territory(&config)?;
    write_json(writer, &output)
}

pub(crate) fn execute_territory(config: &TerritoryConfig) -> Result<TerritoryOutput, CliError> {
    let scored = load_scored(&config.dataset)?;
    let regions = region_breakdown(scored.iter().map(|candidate| &candidate.location));
    let heat = if config.categories.is_empty() {
        heat_points(&scored, config.metric)
    } else {
        let filter = DashboardFilter::default()
            .with_categories(config.categories.iter().copied())
            .with_min_rating(0.0);
        heat_points(&admitted_by(&filter, &scored), config.metric)
    };
    Ok(TerritoryOutput {
        metric: config.metric,
        categories: config.categories.clone(),
        regions,
        heat,
    })
}
