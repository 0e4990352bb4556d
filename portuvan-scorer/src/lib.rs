//! Scoring and exploration utilities for PortuVan locations.
//!
//! The crate provides two complementary capabilities:
//! - **Desirability scoring** turns the raw [`Signals`](portuvan_core::Signals)
//!   of a location into a single comparable value via [`DesirabilityScorer`],
//!   which implements the [`Scorer`](portuvan_core::Scorer) trait so the
//!   planner can consume any scoring strategy.
//! - **Dataset exploration** ranks the scored set per category
//!   ([`top_picks`]), filters it for dashboards ([`DashboardFilter`]) and
//!   summarises it by territory ([`region_breakdown`], [`heat_points`]).
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use portuvan_core::{Category, Location, Signals};
//! use portuvan_scorer::{DesirabilityScorer, score_locations, top_picks};
//!
//! let locations = vec![
//!     Location::new("Praia A", Coord { x: -8.6, y: 37.1 }, Category::Beach, Signals::new(4.5, 99, 25.0)),
//!     Location::new("Praia B", Coord { x: -8.7, y: 37.0 }, Category::Beach, Signals::new(4.0, 9, 0.0)),
//! ];
//! let scored = score_locations(locations, &DesirabilityScorer);
//! let picks = top_picks(&scored, Category::Beach, 1);
//! assert_eq!(picks[0].location.name, "Praia A");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod desirability;
mod picks;
mod territory;

pub use desirability::{AMENITY_DIVISOR, DesirabilityScorer, desirability_score, score_locations};
pub use picks::{
    CategoryPicks, DEFAULT_MIN_RATING, DEFAULT_PICK_LIMIT, DashboardFilter, PICK_CATEGORIES,
    top_picks, top_picks_by_category,
};
pub use territory::{
    HeatMetric, HeatPoint, Region, RegionCount, UnknownHeatMetric, heat_points, region_breakdown,
};
