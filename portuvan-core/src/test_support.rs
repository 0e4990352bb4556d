//! Deterministic collaborators used by unit and behaviour tests.
//!
//! Nothing here touches the network or a random source, so tests built on
//! these helpers produce the same itinerary and trip on every run.

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use geo::{Coord, LineString};

use crate::{
    Category, Location, RouteSegment, RouteSegmentProvider, RoutingError, ScoredLocation, Signals,
    StopChooser,
};

/// Build a scored location at `latitude` with a fixed longitude.
///
/// The score is taken verbatim so tests control ordering directly.
pub fn scored_location(name: &str, latitude: f64, score: f64) -> ScoredLocation {
    ScoredLocation::new(
        Location::new(
            name,
            Coord {
                x: -8.5,
                y: latitude,
            },
            Category::Campsite,
            Signals::new(4.0, 100, 50.0),
        ),
        score,
    )
}

/// `RouteSegmentProvider` returning the same distance and duration for every
/// leg, with a two-point geometry joining the endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRouteProvider {
    distance_m: f64,
    duration: Duration,
}

impl FixedRouteProvider {
    /// Construct a provider reporting `distance_m` and `duration` per leg.
    pub const fn new(distance_m: f64, duration: Duration) -> Self {
        Self {
            distance_m,
            duration,
        }
    }
}

impl RouteSegmentProvider for FixedRouteProvider {
    fn resolve_segment(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        Ok(RouteSegment::new(
            Some(LineString::from(vec![start, end])),
            self.distance_m,
            self.duration,
        ))
    }
}

/// `RouteSegmentProvider` that fails every request as if offline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnavailableRouteProvider;

impl RouteSegmentProvider for UnavailableRouteProvider {
    fn resolve_segment(
        &self,
        _start: Coord<f64>,
        _end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        Err(RoutingError::Network {
            url: "stub://unavailable".to_owned(),
            message: "routing service unavailable".to_owned(),
        })
    }
}

/// `RouteSegmentProvider` that fails only the legs at the given positions.
///
/// Legs are counted in call order starting from zero.
#[derive(Debug)]
pub struct FlakyRouteProvider {
    inner: FixedRouteProvider,
    failing: Vec<usize>,
    calls: Cell<usize>,
}

impl FlakyRouteProvider {
    /// Wrap `inner`, failing the calls whose index appears in `failing`.
    pub fn new(inner: FixedRouteProvider, failing: impl IntoIterator<Item = usize>) -> Self {
        Self {
            inner,
            failing: failing.into_iter().collect(),
            calls: Cell::new(0),
        }
    }
}

impl RouteSegmentProvider for FlakyRouteProvider {
    fn resolve_segment(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if self.failing.contains(&call) {
            return Err(RoutingError::Timeout {
                url: "stub://flaky".to_owned(),
                timeout_secs: 2,
            });
        }
        self.inner.resolve_segment(start, end)
    }
}

/// Chooser that always picks the first candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstChooser;

impl StopChooser for FirstChooser {
    fn choose(&mut self, _len: usize) -> usize {
        0
    }
}

/// Chooser replaying a fixed script of indices, then falling back to `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
}

impl ScriptedChooser {
    /// Replay `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl StopChooser for ScriptedChooser {
    fn choose(&mut self, _len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0)
    }
}
