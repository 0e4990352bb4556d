//! Planner tuning values.

use std::cmp::Ordering;
use std::collections::HashSet;

use portuvan_core::{BandSelection, Endpoint, GeographicBand};
use thiserror::Error;

/// Size of the sampling window for best-of bands.
pub const DEFAULT_TOP_K: usize = 5;

/// Bands of the default Lisbon to Porto loop, in traversal order.
///
/// The route heads south along the Alentejo coast, turns around in the
/// Algarve and returns north through the Centro.
#[must_use]
pub fn default_bands() -> Vec<GeographicBand> {
    vec![
        GeographicBand::new("Alentejo Coast", 37.3, 38.6, BandSelection::Random),
        GeographicBand::below("Algarve", 37.2, BandSelection::BestOf),
        GeographicBand::new("Centro", 39.0, 40.8, BandSelection::Random),
    ]
}

/// Errors raised by [`PlannerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerConfigError {
    /// A band's bounds are `NaN` or do not describe a non-empty interval.
    #[error("band '{name}' has invalid bounds [{min_latitude}, {max_latitude})")]
    InvalidBandBounds {
        /// Offending band.
        name: String,
        /// Configured lower bound.
        min_latitude: f64,
        /// Configured upper bound.
        max_latitude: f64,
    },
    /// Two bands share a name.
    #[error("band name '{name}' is used more than once")]
    DuplicateBandName {
        /// Repeated name.
        name: String,
    },
    /// The best-of sampling window is empty.
    #[error("top-k sampling window must be at least 1")]
    ZeroTopK,
}

/// Configuration for [`ItineraryGenerator`](crate::ItineraryGenerator).
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// First stop of every itinerary.
    pub start: Endpoint,
    /// Last stop of every itinerary.
    pub end: Endpoint,
    /// Bands in traversal order.
    pub bands: Vec<GeographicBand>,
    /// Number of top-scoring candidates best-of bands sample from.
    pub top_k: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            start: Endpoint::lisbon(),
            end: Endpoint::porto(),
            bands: default_bands(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl PlannerConfig {
    /// Replace the bands.
    #[must_use]
    pub fn with_bands(mut self, bands: Vec<GeographicBand>) -> Self {
        self.bands = bands;
        self
    }

    /// Replace the best-of sampling window.
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Replace both endpoints.
    #[must_use]
    pub fn with_endpoints(mut self, start: Endpoint, end: Endpoint) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Check the configuration for values the generator cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerConfigError`] when `top_k` is zero, when a band's
    /// lower bound is not strictly below its upper bound, or when band names
    /// repeat.
    ///
    /// # Examples
    /// ```
    /// use portuvan_planner::{PlannerConfig, PlannerConfigError};
    ///
    /// assert!(PlannerConfig::default().validate().is_ok());
    /// let err = PlannerConfig::default().with_top_k(0).validate().unwrap_err();
    /// assert_eq!(err, PlannerConfigError::ZeroTopK);
    /// ```
    pub fn validate(&self) -> Result<(), PlannerConfigError> {
        if self.top_k == 0 {
            return Err(PlannerConfigError::ZeroTopK);
        }
        let mut seen = HashSet::new();
        for band in &self.bands {
            let ordered = band.min_latitude.partial_cmp(&band.max_latitude);
            if ordered != Some(Ordering::Less) {
                return Err(PlannerConfigError::InvalidBandBounds {
                    name: band.name.clone(),
                    min_latitude: band.min_latitude,
                    max_latitude: band.max_latitude,
                });
            }
            if !seen.insert(band.name.as_str()) {
                return Err(PlannerConfigError::DuplicateBandName {
                    name: band.name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_config_is_valid() {
        let config = PlannerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.bands.len(), 3);
        assert_eq!(config.top_k, DEFAULT_TOP_K);
    }

    #[rstest]
    fn only_the_algarve_band_is_best_of() {
        let bands = default_bands();
        let best_of: Vec<&str> = bands
            .iter()
            .filter(|band| band.selection == BandSelection::BestOf)
            .map(|band| band.name.as_str())
            .collect();
        assert_eq!(best_of, vec!["Algarve"]);
    }

    #[rstest]
    #[case(38.0, 38.0)]
    #[case(39.0, 38.0)]
    #[case(f64::NAN, 38.0)]
    fn rejects_empty_or_inverted_bands(#[case] min: f64, #[case] max: f64) {
        let config = PlannerConfig::default().with_bands(vec![GeographicBand::new(
            "Broken",
            min,
            max,
            BandSelection::Random,
        )]);
        assert!(matches!(
            config.validate(),
            Err(PlannerConfigError::InvalidBandBounds { .. })
        ));
    }

    #[rstest]
    fn rejects_duplicate_band_names() {
        let config = PlannerConfig::default().with_bands(vec![
            GeographicBand::new("Coast", 37.0, 38.0, BandSelection::Random),
            GeographicBand::new("Coast", 39.0, 40.0, BandSelection::Random),
        ]);
        assert_eq!(
            config.validate(),
            Err(PlannerConfigError::DuplicateBandName {
                name: "Coast".into()
            })
        );
    }

    #[rstest]
    fn empty_band_list_is_valid() {
        let config = PlannerConfig::default().with_bands(Vec::new());
        assert_eq!(config.validate(), Ok(()));
    }
}
