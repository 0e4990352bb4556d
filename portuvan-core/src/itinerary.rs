//! Ordered stop sequences produced by the itinerary generator.

use geo::Coord;

use crate::{Endpoint, ScoredLocation};

/// A single stop of an itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Stop {
    /// Fixed trip boundary.
    Endpoint(Endpoint),
    /// Location sampled from a geographic band.
    Visit {
        /// Name of the band the stop was drawn from.
        band: String,
        /// The chosen location.
        location: ScoredLocation,
    },
}

impl Stop {
    /// Display name of the stop.
    pub fn name(&self) -> &str {
        match self {
            Self::Endpoint(endpoint) => &endpoint.name,
            Self::Visit { location, .. } => &location.location.name,
        }
    }

    /// WGS84 position of the stop.
    pub const fn coord(&self) -> Coord<f64> {
        match self {
            Self::Endpoint(endpoint) => endpoint.coord,
            Self::Visit { location, .. } => location.location.coord,
        }
    }

    /// Category label, or `Start`/`End` for endpoints.
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Endpoint(endpoint) => endpoint.role.as_str(),
            Self::Visit { location, .. } => location.location.category.as_str(),
        }
    }

    /// Star rating shown alongside the stop.
    pub const fn rating(&self) -> f64 {
        match self {
            Self::Endpoint(endpoint) => endpoint.rating(),
            Self::Visit { location, .. } => location.location.signals.rating(),
        }
    }

    /// The sampled location, if this stop is not an endpoint.
    pub const fn visit(&self) -> Option<&ScoredLocation> {
        match self {
            Self::Endpoint(_) => None,
            Self::Visit { location, .. } => Some(location),
        }
    }

    /// Search link for the stop's coordinates.
    pub fn maps_url(&self) -> String {
        let coord = self.coord();
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            coord.y, coord.x
        )
    }
}

/// An ordered trip from a start endpoint to an end endpoint.
///
/// The first and last stops are always the endpoints; everything in between
/// was sampled from a band, in band traversal order.
///
/// # Examples
/// ```
/// use portuvan_core::{Endpoint, Itinerary};
///
/// let itinerary = Itinerary::new(Endpoint::lisbon(), Vec::new(), Endpoint::porto());
/// assert_eq!(itinerary.len(), 2);
/// assert_eq!(itinerary.stops()[0].name(), "Lisbon");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Itinerary {
    stops: Vec<Stop>,
}

impl Itinerary {
    /// Frame `visits` between the start and end endpoints.
    pub fn new<I>(start: Endpoint, visits: I, end: Endpoint) -> Self
    where
        I: IntoIterator<Item = Stop>,
    {
        let mut stops = vec![Stop::Endpoint(start)];
        stops.extend(visits);
        stops.push(Stop::Endpoint(end));
        Self { stops }
    }

    /// All stops in travel order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops including both endpoints.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: an itinerary carries at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sampled locations, excluding endpoints.
    pub fn visits(&self) -> impl Iterator<Item = &ScoredLocation> {
        self.stops.iter().filter_map(Stop::visit)
    }

    /// Consecutive stop pairs, one per driving leg.
    pub fn legs(&self) -> impl Iterator<Item = (&Stop, &Stop)> {
        self.stops.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((from, to)),
            _ => None,
        })
    }

    /// Consume the itinerary and return its stops.
    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }
}
