//! Assembled trips: labelled stops, driving legs and aggregate metrics.
//!
//! A [`Trip`] is the explicit result of resolving every leg of an
//! [`Itinerary`](crate::Itinerary). Totals are derived from the legs on
//! construction rather than stored per stop.

use std::time::Duration;

use geo::LineString;

use crate::Stop;

/// Metres to statute miles.
pub const MILES_PER_METRE: f64 = 0.000_621_371;

/// Label attached to the first stop of every trip.
pub const START_LABEL: &str = "Start";

/// Format a leg duration as a short drive-time label.
///
/// Durations of an hour or more render as `"{h}h {m}m"`, shorter ones as
/// `"{m}m"`. Seconds are truncated.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use portuvan_core::format_drive_time;
///
/// assert_eq!(format_drive_time(Duration::from_secs(5_400)), "1h 30m");
/// assert_eq!(format_drive_time(Duration::from_secs(59)), "0m");
/// ```
pub fn format_drive_time(duration: Duration) -> String {
    let secs = duration.as_secs();
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Drawable path of a leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "line", rename_all = "snake_case")
)]
pub enum LegGeometry {
    /// Geometry returned by the routing service.
    Routed(LineString<f64>),
    /// Two-point connector used when routing was unavailable.
    Straight(LineString<f64>),
}

impl LegGeometry {
    /// Underlying polyline.
    pub const fn line(&self) -> &LineString<f64> {
        match self {
            Self::Routed(line) | Self::Straight(line) => line,
        }
    }

    /// Report whether the leg fell back to a straight connector.
    pub const fn is_straight(&self) -> bool {
        matches!(self, Self::Straight(_))
    }
}

/// One driving leg between consecutive stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Leg {
    /// Name of the departure stop.
    pub from: String,
    /// Name of the arrival stop.
    pub to: String,
    /// Path to draw.
    pub geometry: LegGeometry,
    /// Driving distance in metres; `0.0` when unavailable.
    pub distance_m: f64,
    /// Driving time; zero when unavailable.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "duration_s", serialize_with = "crate::serde_support::duration_secs")
    )]
    pub duration: Duration,
}

impl Leg {
    /// Drive-time label for the arrival stop.
    pub fn drive_time(&self) -> String {
        format_drive_time(self.duration)
    }
}

/// A stop with its arrival drive-time label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TripStop {
    /// The stop itself.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stop: Stop,
    /// `"Start"` for the first stop, otherwise the incoming leg's drive time.
    pub drive_time: String,
}

/// Aggregate metrics over a whole trip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TripSummary {
    /// Sum of leg distances in metres.
    pub total_distance_m: f64,
    /// Sum of leg durations.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "total_duration_s", serialize_with = "crate::serde_support::duration_secs")
    )]
    pub total_duration: Duration,
    /// Number of stops including endpoints.
    pub stop_count: usize,
}

impl TripSummary {
    /// Total distance in statute miles.
    pub fn distance_miles(&self) -> f64 {
        self.total_distance_m * MILES_PER_METRE
    }

    /// Total driving time in hours.
    pub fn duration_hours(&self) -> f64 {
        self.total_duration.as_secs_f64() / 3_600.0
    }
}

/// A fully labelled, renderable trip.
///
/// # Examples
/// ```
/// use portuvan_core::{Endpoint, Itinerary, Trip};
///
/// let itinerary = Itinerary::new(Endpoint::lisbon(), Vec::new(), Endpoint::porto());
/// let trip = Trip::new(itinerary.into_stops(), Vec::new());
/// assert_eq!(trip.summary.stop_count, 2);
/// assert_eq!(trip.stops[0].drive_time, "Start");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trip {
    /// Stops in travel order with drive-time labels.
    pub stops: Vec<TripStop>,
    /// One leg per consecutive stop pair.
    pub legs: Vec<Leg>,
    /// Totals derived from `legs`.
    pub summary: TripSummary,
}

impl Trip {
    /// Label `stops` from `legs` and derive the summary.
    ///
    /// `legs[i]` is expected to arrive at `stops[i + 1]`. A stop without a
    /// matching leg is labelled as a zero-length drive.
    pub fn new(stops: Vec<Stop>, legs: Vec<Leg>) -> Self {
        let stop_count = stops.len();
        let labelled = stops
            .into_iter()
            .enumerate()
            .map(|(index, stop)| {
                let drive_time = match index.checked_sub(1) {
                    None => START_LABEL.to_owned(),
                    Some(leg_index) => legs
                        .get(leg_index)
                        .map_or_else(|| format_drive_time(Duration::ZERO), Leg::drive_time),
                };
                TripStop { stop, drive_time }
            })
            .collect();
        let summary = TripSummary {
            total_distance_m: legs.iter().map(|leg| leg.distance_m).sum(),
            total_duration: legs
                .iter()
                .fold(Duration::ZERO, |total, leg| total.saturating_add(leg.duration)),
            stop_count,
        };
        Self {
            stops: labelled,
            legs,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Endpoint, Itinerary};
    use geo::Coord;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0m")]
    #[case(59, "0m")]
    #[case(60, "1m")]
    #[case(3_599, "59m")]
    #[case(3_600, "1h 0m")]
    #[case(9_000, "2h 30m")]
    fn formats_drive_time(#[case] secs: u64, #[case] expected: &str) {
        assert_eq!(format_drive_time(Duration::from_secs(secs)), expected);
    }

    fn straight_leg(distance_m: f64, secs: u64) -> Leg {
        Leg {
            from: "Lisbon".into(),
            to: "Porto".into(),
            geometry: LegGeometry::Straight(LineString::from(vec![
                Coord { x: -9.1, y: 38.7 },
                Coord { x: -8.6, y: 41.2 },
            ])),
            distance_m,
            duration: Duration::from_secs(secs),
        }
    }

    #[rstest]
    fn summary_sums_legs() {
        let itinerary = Itinerary::new(Endpoint::lisbon(), Vec::new(), Endpoint::porto());
        let trip = Trip::new(itinerary.into_stops(), vec![straight_leg(313_000.0, 10_800)]);
        assert_eq!(trip.summary.total_distance_m, 313_000.0);
        assert_eq!(trip.summary.total_duration, Duration::from_secs(10_800));
        assert!((trip.summary.duration_hours() - 3.0).abs() < 1e-9);
        assert!((trip.summary.distance_miles() - 194.489_123).abs() < 1e-3);
        assert_eq!(trip.stops[1].drive_time, "3h 0m");
    }

    #[rstest]
    fn summary_duration_saturates_instead_of_overflowing() {
        let itinerary = Itinerary::new(Endpoint::lisbon(), Vec::new(), Endpoint::porto());
        let mut huge = straight_leg(1.0, 0);
        huge.duration = Duration::MAX;
        let trip = Trip::new(itinerary.into_stops(), vec![huge.clone(), huge]);
        assert_eq!(trip.summary.total_duration, Duration::MAX);
    }

    #[rstest]
    fn missing_leg_labels_zero_drive() {
        let itinerary = Itinerary::new(Endpoint::lisbon(), Vec::new(), Endpoint::porto());
        let trip = Trip::new(itinerary.into_stops(), Vec::new());
        assert_eq!(trip.stops[1].drive_time, "0m");
        assert_eq!(trip.summary.total_distance_m, 0.0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_durations_as_seconds() {
        let itinerary = Itinerary::new(Endpoint::lisbon(), Vec::new(), Endpoint::porto());
        let trip = Trip::new(itinerary.into_stops(), vec![straight_leg(1_000.0, 90)]);
        let json = serde_json::to_value(&trip).expect("trip should serialise");
        assert_eq!(json["summary"]["total_duration_s"], 90.0);
        assert_eq!(json["legs"][0]["geometry"]["kind"], "straight");
        assert_eq!(json["stops"][0]["kind"], "endpoint");
        assert_eq!(json["stops"][0]["drive_time"], "Start");
    }
}
