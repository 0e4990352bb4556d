//! HTTP-based `RouteSegmentProvider` using OSRM's Route API.
//!
//! The [`RouteSegmentProvider`] trait is synchronous so trip assembly stays a
//! plain sequential loop. This provider bridges the async HTTP call to the
//! sync interface by blocking on a Tokio runtime internally.

use std::time::Duration;

use geo::Coord;
use portuvan_core::{RouteSegment, RouteSegmentProvider, RoutingError};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::osrm::{GeoJsonLine, RouteResponse};

/// Error type for [`OsrmRouteProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The reqwest client rejected the configuration.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The private current-thread runtime could not start.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Longest leg duration, in seconds, accepted from the service.
pub const MAX_LEG_DURATION_SECS: f64 = 7.0 * 24.0 * 3_600.0;

/// Longest leg distance, in metres, accepted from the service.
pub const MAX_LEG_DISTANCE_M: f64 = 20_000_000.0;

/// User agent sent with every route request.
pub const DEFAULT_USER_AGENT: &str = "portuvan-routing/0.1";

/// Public OSRM demo server.
pub const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org";

/// Routing profile used for every leg.
pub const DEFAULT_PROFILE: &str = "driving";

/// Per-request timeout. Short, so one unreachable leg cannot stall assembly.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Configuration for [`OsrmRouteProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsrmRouteProviderConfig {
    /// OSRM server root, e.g. `"http://localhost:5000"`.
    pub base_url: String,
    /// OSRM profile segment of the URL.
    pub profile: String,
    /// Request timeout duration, covering connect and response.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for OsrmRouteProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OsrmRouteProviderConfig {
    /// Default settings pointed at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Replace the per-leg timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the OSRM profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Replace the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Route-segment provider backed by the OSRM Route API.
///
/// The provider owns a current-thread Tokio runtime that is reused across
/// calls.
///
/// # Runtime behaviour
///
/// Outside Tokio, requests run on the provider's private runtime. Inside a
/// multi-threaded runtime ([`RuntimeFlavor::MultiThread`] as reported by
/// [`Handle::try_current()`]) the ambient handle drives the request under
/// [`tokio::task::block_in_place`], since nesting `block_on` would panic.
/// Inside a `current_thread` runtime the private runtime is used and the
/// caller's executor stalls until the leg resolves or times out.
pub struct OsrmRouteProvider {
    client: Client,
    config: OsrmRouteProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for OsrmRouteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmRouteProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl OsrmRouteProvider {
    /// Provider for `base_url` using the default timeout and user agent.
    ///
    /// # Errors
    ///
    /// See [`with_config`](Self::with_config).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OsrmRouteProviderConfig::new(base_url))
    }

    /// Provider using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] when the HTTP client or the private
    /// runtime cannot be constructed.
    pub fn with_config(config: OsrmRouteProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &OsrmRouteProviderConfig {
        &self.config
    }

    /// Build the OSRM Route API URL for one leg.
    ///
    /// The URL format is
    /// `{base_url}/route/v1/{profile}/{lon},{lat};{lon},{lat}?overview=full&geometries=geojson`.
    fn build_route_url(&self, start: Coord<f64>, end: Coord<f64>) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            start.x,
            start.y,
            end.x,
            end.y
        )
    }

    /// Fetch one route asynchronously.
    async fn fetch_route_async(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        let url = self.build_route_url(start, end);
        log::debug!("requesting route {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let route_response: RouteResponse =
            response.json().await.map_err(|err| {
                if err.is_timeout() {
                    self.convert_reqwest_error(&err, &url)
                } else {
                    RoutingError::Parse {
                        message: err.to_string(),
                    }
                }
            })?;

        convert_response(route_response)
    }

    /// Convert a reqwest error to a `RoutingError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RoutingError {
        if error.is_timeout() {
            return RoutingError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return RoutingError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        RoutingError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Convert an OSRM response to a `RouteSegment`.
///
/// Only the first (fastest) route is used. Negative or NaN distances and
/// durations become zero; values beyond a week of driving or half the
/// planet's circumference are rejected as unparseable.
fn convert_response(response: RouteResponse) -> Result<RouteSegment, RoutingError> {
    if !response.is_ok() {
        return Err(RoutingError::Service {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let route = response
        .routes
        .and_then(|routes| routes.into_iter().next())
        .ok_or(RoutingError::NoRoute)?;

    if route.duration > MAX_LEG_DURATION_SECS || route.distance > MAX_LEG_DISTANCE_M {
        return Err(RoutingError::Parse {
            message: format!(
                "implausible route: {} m in {} s",
                route.distance, route.duration
            ),
        });
    }

    let duration = Duration::try_from_secs_f64(route.duration).unwrap_or_default();
    let geometry = route.geometry.and_then(GeoJsonLine::into_line_string);

    Ok(RouteSegment::new(geometry, route.distance, duration))
}

impl RouteSegmentProvider for OsrmRouteProvider {
    /// Resolve the driving leg from `start` to `end`.
    ///
    /// Callers already on a Tokio executor should use a multi-threaded
    /// runtime; see the type-level docs.
    fn resolve_segment(
        &self,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<RouteSegment, RoutingError> {
        let future = self.fetch_route_async(start, end);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // Outside Tokio or on a current_thread runtime.
            _ => self.runtime.block_on(future),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::osrm::OsrmRoute;
    use rstest::{fixture, rstest};

    #[fixture]
    fn lisbon() -> Coord<f64> {
        Coord {
            x: -9.1393,
            y: 38.7223,
        }
    }

    #[fixture]
    fn porto() -> Coord<f64> {
        Coord {
            x: -8.6291,
            y: 41.1579,
        }
    }

    fn ok_response(distance: f64, duration: f64, geometry: Option<GeoJsonLine>) -> RouteResponse {
        RouteResponse {
            code: "Ok".to_owned(),
            message: None,
            routes: Some(vec![OsrmRoute {
                distance,
                duration,
                geometry,
            }]),
        }
    }

    #[rstest]
    fn build_route_url_formats_lon_lat_pairs(lisbon: Coord<f64>, porto: Coord<f64>) {
        let provider =
            OsrmRouteProvider::new("http://osrm.example.com").expect("provider should build");

        let url = provider.build_route_url(lisbon, porto);

        assert_eq!(
            url,
            "http://osrm.example.com/route/v1/driving/-9.1393,38.7223;-8.6291,41.1579?overview=full&geometries=geojson"
        );
    }

    #[rstest]
    fn build_route_url_strips_trailing_slash(lisbon: Coord<f64>, porto: Coord<f64>) {
        let provider =
            OsrmRouteProvider::new("http://osrm.example.com/").expect("provider should build");

        let url = provider.build_route_url(lisbon, porto);

        assert!(url.starts_with("http://osrm.example.com/route/"));
        assert!(!url.contains("//route"));
    }

    #[rstest]
    fn first_route_becomes_segment() {
        let geometry = GeoJsonLine {
            kind: "LineString".to_owned(),
            coordinates: vec![[-9.14, 38.72], [-8.9, 39.5], [-8.63, 41.16]],
        };

        let segment =
            convert_response(ok_response(313_000.0, 10_800.5, Some(geometry))).expect("should parse");

        assert_eq!(segment.distance_m, 313_000.0);
        assert_eq!(segment.duration, Duration::from_secs_f64(10_800.5));
        assert_eq!(segment.geometry.map(|line| line.0.len()), Some(3));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(-1.0)]
    fn convert_response_zeroes_invalid_values(#[case] raw: f64) {
        let segment = convert_response(ok_response(raw, raw, None)).expect("should parse");

        assert_eq!(segment.distance_m, 0.0);
        assert_eq!(segment.duration, Duration::ZERO);
        assert!(segment.geometry.is_none());
    }

    #[rstest]
    #[case(1_000.0, 1e19)]
    #[case(1_000.0, f64::INFINITY)]
    #[case(1e9, 600.0)]
    #[case(f64::INFINITY, 600.0)]
    fn convert_response_rejects_implausible_legs(#[case] distance: f64, #[case] duration: f64) {
        let err = convert_response(ok_response(distance, duration, None)).expect_err("should fail");

        assert!(matches!(err, RoutingError::Parse { .. }), "got {err:?}");
    }

    #[rstest]
    fn week_long_leg_is_still_accepted() {
        let segment = convert_response(ok_response(MAX_LEG_DISTANCE_M, MAX_LEG_DURATION_SECS, None))
            .expect("should parse");

        assert_eq!(segment.duration, Duration::from_secs(604_800));
    }

    #[rstest]
    fn failure_code_becomes_service_error() {
        let response = RouteResponse {
            code: "NoRoute".to_owned(),
            message: Some("Impossible route".to_owned()),
            routes: None,
        };

        let err = convert_response(response).expect_err("should fail");

        assert_eq!(
            err,
            RoutingError::Service {
                code: "NoRoute".to_owned(),
                message: "Impossible route".to_owned(),
            }
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Vec::new()))]
    fn convert_response_requires_a_route(#[case] routes: Option<Vec<OsrmRoute>>) {
        let response = RouteResponse {
            code: "Ok".to_owned(),
            message: None,
            routes,
        };

        assert_eq!(convert_response(response), Err(RoutingError::NoRoute));
    }

    #[rstest]
    fn config_defaults_match_public_demo_server() {
        let config = OsrmRouteProviderConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.profile, "driving");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[rstest]
    fn config_builders_override_defaults() {
        let config = OsrmRouteProviderConfig::new("http://osrm.internal:5000")
            .with_timeout(Duration::from_secs(5))
            .with_profile("car")
            .with_user_agent("portuvan-tests/0.0");

        assert_eq!(config.base_url, "http://osrm.internal:5000");
        assert_eq!(config.profile, "car");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "portuvan-tests/0.0");
    }
}
