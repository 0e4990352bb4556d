//! Test utilities for routing providers.
//!
//! This module provides [`StubRouteProvider`], a deterministic test double
//! for [`RouteSegmentProvider`] that returns a pre-configured response and
//! records every leg it was asked to resolve, without making HTTP requests.

use std::cell::RefCell;

use geo::Coord;
use portuvan_core::{RouteSegment, RouteSegmentProvider, RoutingError};

/// Stub `RouteSegmentProvider` for testing.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use portuvan_core::{RouteSegment, RouteSegmentProvider};
/// use portuvan_data::routing::test_support::StubRouteProvider;
///
/// let segment = RouteSegment::new(None, 1_500.0, Duration::from_secs(120));
/// let provider = StubRouteProvider::with_segment(segment);
///
/// let start = Coord { x: -9.14, y: 38.72 };
/// let end = Coord { x: -8.63, y: 41.16 };
/// assert!(provider.resolve_segment(start, end).is_ok());
/// assert_eq!(provider.requests(), vec![(start, end)]);
/// ```
#[derive(Debug, Clone)]
pub struct StubRouteProvider {
    response: StubResponse,
    requests: RefCell<Vec<(Coord<f64>, Coord<f64>)>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Segment(RouteSegment),
    Error(RoutingError),
}

impl StubRouteProvider {
    /// Create a provider that returns `segment` for every leg.
    #[must_use]
    pub const fn with_segment(segment: RouteSegment) -> Self {
        Self {
            response: StubResponse::Segment(segment),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Create a provider that fails every leg with `error`.
    #[must_use]
    pub const fn with_error(error: RoutingError) -> Self {
        Self {
            response: StubResponse::Error(error),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Legs requested so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<(Coord<f64>, Coord<f64>)> {
        self.requests.borrow().clone()
    }
}

impl RouteSegmentProvider for StubRouteProvider {
    fn resolve_segment(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        self.requests.borrow_mut().push((start, end));
        match &self.response {
            StubResponse::Segment(segment) => Ok(segment.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
