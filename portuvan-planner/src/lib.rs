//! Itinerary generation and trip assembly for PortuVan.
//!
//! This crate turns a scored dataset into a drivable trip in two stages:
//!
//! 1. [`ItineraryGenerator`] frames one sampled stop per
//!    [`GeographicBand`](portuvan_core::GeographicBand) between the fixed
//!    endpoints. Stop order comes from the band order in [`PlannerConfig`];
//!    no route optimisation takes place.
//! 2. [`assemble_trip`] resolves every leg through a
//!    [`RouteSegmentProvider`](portuvan_core::RouteSegmentProvider), labels
//!    each stop with its drive time and derives the trip totals. Routing
//!    failures degrade to straight, zero-length legs.
//!
//! Randomness enters only through a [`StopChooser`](portuvan_core::StopChooser);
//! [`SeededChooser`] gives reproducible output for a fixed seed.
//!
//! # Examples
//!
//! ```
//! use portuvan_core::PreferenceMode;
//! use portuvan_core::test_support::UnavailableRouteProvider;
//! use portuvan_planner::{SeededChooser, TripPlanner};
//!
//! let planner = TripPlanner::new(UnavailableRouteProvider);
//! let trip = planner.plan(&[], PreferenceMode::Balanced, &mut SeededChooser::from_seed(7));
//! assert_eq!(trip.summary.stop_count, 2);
//! assert_eq!(trip.summary.total_distance_m, 0.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assembly;
mod chooser;
mod config;
mod generator;

pub use assembly::{TripPlanner, assemble_trip};
pub use chooser::SeededChooser;
pub use config::{DEFAULT_TOP_K, PlannerConfig, PlannerConfigError, default_bands};
pub use generator::ItineraryGenerator;
