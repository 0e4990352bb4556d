//! Latitude bands that impose the stop order of an itinerary.
//!
//! Bands are half-open: a latitude belongs to a band when
//! `min_latitude <= lat < max_latitude`. Use `f64::NEG_INFINITY` or
//! `f64::INFINITY` for open-ended bands.

/// How a band picks its representative stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BandSelection {
    /// Uniform choice over every qualifying candidate.
    #[default]
    Random,
    /// Uniform choice over the highest-scoring candidates only.
    BestOf,
}

/// A named latitude interval.
///
/// # Examples
/// ```
/// use portuvan_core::{BandSelection, GeographicBand};
///
/// let algarve = GeographicBand::below("Algarve", 37.2, BandSelection::BestOf);
/// assert!(algarve.contains(37.0));
/// assert!(!algarve.contains(37.2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeographicBand {
    /// Display name of the region.
    pub name: String,
    /// Inclusive lower latitude bound.
    pub min_latitude: f64,
    /// Exclusive upper latitude bound.
    pub max_latitude: f64,
    /// Selection style for this band.
    pub selection: BandSelection,
}

impl GeographicBand {
    /// Construct a band covering `[min_latitude, max_latitude)`.
    pub fn new(
        name: impl Into<String>,
        min_latitude: f64,
        max_latitude: f64,
        selection: BandSelection,
    ) -> Self {
        Self {
            name: name.into(),
            min_latitude,
            max_latitude,
            selection,
        }
    }

    /// Construct a band open to the south.
    pub fn below(name: impl Into<String>, max_latitude: f64, selection: BandSelection) -> Self {
        Self::new(name, f64::NEG_INFINITY, max_latitude, selection)
    }

    /// Report whether `latitude` falls inside the band.
    ///
    /// `NaN` latitudes belong to no band.
    pub fn contains(&self, latitude: f64) -> bool {
        latitude >= self.min_latitude && latitude < self.max_latitude
    }
}
