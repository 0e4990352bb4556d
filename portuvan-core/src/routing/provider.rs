//! Route-segment provider trait and the segment value it returns.

use std::time::Duration;

use geo::{Coord, LineString};

use super::error::RoutingError;

/// A resolved driving leg.
///
/// Distances are metres. A segment may lack geometry when the service omits
/// it; renderers then fall back to a straight connector.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    /// Routed polyline, if the service returned one.
    pub geometry: Option<LineString<f64>>,
    /// Driving distance in metres; finite and non-negative.
    pub distance_m: f64,
    /// Driving duration.
    pub duration: Duration,
}

impl RouteSegment {
    /// Build a segment, zeroing non-finite or negative distances.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use portuvan_core::RouteSegment;
    ///
    /// let segment = RouteSegment::new(None, f64::NAN, Duration::from_secs(60));
    /// assert_eq!(segment.distance_m, 0.0);
    /// ```
    pub fn new(geometry: Option<LineString<f64>>, distance_m: f64, duration: Duration) -> Self {
        let distance_m = if distance_m.is_finite() {
            distance_m.max(0.0)
        } else {
            0.0
        };
        Self {
            geometry,
            distance_m,
            duration,
        }
    }
}

/// Fetch the driving leg between two coordinates.
///
/// Implementations should bound every call with a short timeout and report
/// any failure as a [`RoutingError`] rather than retrying indefinitely.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use geo::{Coord, LineString};
/// use portuvan_core::{RouteSegment, RouteSegmentProvider, RoutingError};
///
/// struct CrowFlies;
///
/// impl RouteSegmentProvider for CrowFlies {
///     fn resolve_segment(
///         &self,
///         start: Coord<f64>,
///         end: Coord<f64>,
///     ) -> Result<RouteSegment, RoutingError> {
///         let line = LineString::from(vec![start, end]);
///         Ok(RouteSegment::new(Some(line), 1_000.0, Duration::from_secs(60)))
///     }
/// }
///
/// let segment = CrowFlies.resolve_segment(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 })?;
/// assert_eq!(segment.duration, Duration::from_secs(60));
/// # Ok::<(), RoutingError>(())
/// ```
pub trait RouteSegmentProvider {
    /// Resolve the leg from `start` to `end`.
    fn resolve_segment(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError>;
}

impl<P: RouteSegmentProvider + ?Sized> RouteSegmentProvider for &P {
    fn resolve_segment(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        (**self).resolve_segment(start, end)
    }
}

impl<P: RouteSegmentProvider + ?Sized> RouteSegmentProvider for Box<P> {
    fn resolve_segment(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        (**self).resolve_segment(start, end)
    }
}
