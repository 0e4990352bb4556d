use thiserror::Error;

/// Errors from [`crate::routing::RouteSegmentProvider::resolve_segment`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The request exceeded the configured timeout.
    #[error("routing request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("routing request to {url} failed with status {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Transport error description.
        message: String,
    },
    /// The request never produced a response.
    #[error("routing request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service answered but reported a failure code.
    #[error("routing service returned {code}: {message}")]
    Service {
        /// Service status code, e.g. `"NoRoute"`.
        code: String,
        /// Optional service message.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse routing response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
    /// The response decoded but carried no route.
    #[error("routing response contained no route")]
    NoRoute,
}
