//! Resolve driving legs between consecutive stops.
//!
//! The `RouteSegmentProvider` trait abstracts the routing collaborator. Given
//! two coordinates it returns the routed geometry, distance and duration of
//! the leg, or a [`RoutingError`] describing why the leg is unavailable.
//!
//! Callers treat every error variant identically; the variants exist for
//! logging.

mod error;
mod provider;

pub use error::RoutingError;
pub use provider::{RouteSegment, RouteSegmentProvider};
