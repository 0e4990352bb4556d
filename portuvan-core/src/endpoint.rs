//! Fixed trip boundaries.

use std::fmt;

use geo::Coord;

/// Rating reported for endpoints, which are never ranked against the dataset.
pub const ENDPOINT_RATING: f64 = 5.0;

/// Whether an endpoint opens or closes the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EndpointRole {
    /// First stop of every itinerary.
    Start,
    /// Last stop of every itinerary.
    End,
}

impl EndpointRole {
    /// Sentinel category label shown in place of a location category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed start or end of the trip.
///
/// # Examples
/// ```
/// use portuvan_core::{Endpoint, EndpointRole};
///
/// let start = Endpoint::lisbon();
/// assert_eq!(start.role, EndpointRole::Start);
/// assert_eq!(start.rating(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Endpoint {
    /// City or landmark name.
    pub name: String,
    /// WGS84 position.
    pub coord: Coord<f64>,
    /// Start or end.
    pub role: EndpointRole,
}

impl Endpoint {
    /// Construct an endpoint.
    pub fn new(name: impl Into<String>, coord: Coord<f64>, role: EndpointRole) -> Self {
        Self {
            name: name.into(),
            coord,
            role,
        }
    }

    /// Default trip start in central Lisbon.
    pub fn lisbon() -> Self {
        Self::new(
            "Lisbon",
            Coord {
                x: -9.1393,
                y: 38.7223,
            },
            EndpointRole::Start,
        )
    }

    /// Default trip end in central Porto.
    pub fn porto() -> Self {
        Self::new(
            "Porto",
            Coord {
                x: -8.6291,
                y: 41.1579,
            },
            EndpointRole::End,
        )
    }

    /// Endpoints always report the maximal rating.
    pub const fn rating(&self) -> f64 {
        ENDPOINT_RATING
    }
}
