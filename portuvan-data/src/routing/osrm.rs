//! OSRM API response types for the Route service.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use geo::{Coord, LineString};
use serde::Deserialize;

/// OSRM Route API response.
///
/// The `code` field indicates the response status. On success `routes` holds
/// the fastest route first.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route found between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, fastest first.
    pub routes: Option<Vec<OsrmRoute>>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One route of a [`RouteResponse`].
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Driving distance in metres.
    pub distance: f64,
    /// Driving duration in seconds.
    pub duration: f64,
    /// Route geometry when requested with `geometries=geojson`.
    pub geometry: Option<GeoJsonLine>,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct GeoJsonLine {
    /// GeoJSON type tag; always `"LineString"` for route geometry.
    #[serde(rename = "type")]
    pub kind: String,
    /// `[lon, lat]` positions.
    pub coordinates: Vec<[f64; 2]>,
}

impl GeoJsonLine {
    /// Convert to a polyline, dropping geometry with fewer than two points.
    #[must_use]
    pub fn into_line_string(self) -> Option<LineString<f64>> {
        if self.kind != "LineString" || self.coordinates.len() < 2 {
            return None;
        }
        Some(LineString::from(
            self.coordinates
                .into_iter()
                .map(|[x, y]| Coord { x, y })
                .collect::<Vec<_>>(),
        ))
    }
}
