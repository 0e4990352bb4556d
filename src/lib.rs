//! Facade crate for the PortuVan road-trip engine.
//!
//! This crate re-exports the core domain types and exposes the scoring
//! engine and the itinerary planner behind feature flags.

#![forbid(unsafe_code)]

pub use portuvan_core::{
    BandSelection, Category, Endpoint, EndpointRole, GeographicBand, Itinerary, Leg, LegGeometry,
    Location, PreferenceMode, RouteSegment, RouteSegmentProvider, RoutingError, ScoredLocation,
    Scorer, Signals, Stop, StopChooser, Trip, TripStop, TripSummary, format_drive_time,
};

#[cfg(feature = "scorer")]
pub use portuvan_scorer::{DesirabilityScorer, score_locations};

#[cfg(feature = "planner")]
pub use portuvan_planner::{ItineraryGenerator, PlannerConfig, SeededChooser, TripPlanner};
