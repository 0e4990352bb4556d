//! Core domain types for the PortuVan road-trip engine.
//!
//! The crate models the scored points of interest that feed the itinerary
//! generator, the fixed trip endpoints, the geographic bands that impose stop
//! order, and the assembled trip handed to presentation layers. Behaviour that
//! depends on the outside world sits behind narrow traits:
//!
//! - [`Scorer`] turns raw [`Signals`] into a desirability score.
//! - [`StopChooser`] picks one of `n` candidates, so tests can replace the
//!   random source.
//! - [`RouteSegmentProvider`] resolves the driving leg between two
//!   coordinates.
//!
//! Coordinates are WGS84 [`geo::Coord`] values with `x = longitude` and
//! `y = latitude`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod band;
pub mod chooser;
pub mod endpoint;
pub mod itinerary;
pub mod location;
pub mod preference;
pub mod routing;
pub mod scorer;
#[cfg(feature = "serde")]
mod serde_support;
pub mod trip;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use band::{BandSelection, GeographicBand};
pub use chooser::StopChooser;
pub use endpoint::{Endpoint, EndpointRole};
pub use itinerary::{Itinerary, Stop};
pub use location::{Category, Location, ScoredLocation, Signals, UnknownCategory};
pub use preference::PreferenceMode;
pub use routing::{RouteSegment, RouteSegmentProvider, RoutingError};
pub use scorer::Scorer;
pub use trip::{Leg, LegGeometry, Trip, TripStop, TripSummary, format_drive_time};
