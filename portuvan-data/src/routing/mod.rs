//! OSRM-backed route-segment provider.
//!
//! This module provides [`OsrmRouteProvider`], an implementation of
//! [`portuvan_core::RouteSegmentProvider`] that resolves a single driving leg
//! through the OSRM Route API.
//!
//! # Architecture
//!
//! The provider requests `route/v1/{profile}/{lon},{lat};{lon},{lat}` with
//! full GeoJSON geometry. The synchronous [`RouteSegmentProvider`] trait is
//! implemented by blocking on async HTTP calls internally, so trip assembly
//! stays synchronous. Every call is bounded by the configured timeout.
//!
//! [`RouteSegmentProvider`]: portuvan_core::RouteSegmentProvider
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use geo::Coord;
//! use portuvan_core::RouteSegmentProvider;
//! use portuvan_data::routing::{OsrmRouteProvider, OsrmRouteProviderConfig};
//!
//! let config = OsrmRouteProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let provider = OsrmRouteProvider::with_config(config)?;
//!
//! let lisbon = Coord { x: -9.1393, y: 38.7223 };
//! let porto = Coord { x: -8.6291, y: 41.1579 };
//! let segment = provider.resolve_segment(lisbon, porto)?;
//! println!("{} m in {:?}", segment.distance_m, segment.duration);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_PROFILE, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, MAX_LEG_DISTANCE_M,
    MAX_LEG_DURATION_SECS, OsrmRouteProvider, OsrmRouteProviderConfig, ProviderBuildError,
};
