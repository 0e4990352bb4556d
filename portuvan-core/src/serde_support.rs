//! Serialisation helpers shared by domain types.

use std::time::Duration;

use serde::Serializer;

/// Serialise a [`Duration`] as fractional seconds.
pub(crate) fn duration_secs<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
