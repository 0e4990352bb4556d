//! Points of interest and the raw signals used to rank them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use geo::Coord;
use thiserror::Error;

/// Highest star rating a location can carry.
pub const MAX_RATING: f64 = 5.0;

/// Upper bound of the amenity density score.
pub const MAX_AMENITY_SCORE: f64 = 100.0;

/// Kind of stop a location offers.
///
/// # Examples
/// ```
/// use portuvan_core::Category;
///
/// let category: Category = "campsite".parse()?;
/// assert_eq!(category, Category::Campsite);
/// assert_eq!(category.to_string(), "Campsite");
/// # Ok::<(), portuvan_core::UnknownCategory>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Category {
    /// Sandy or rocky coastline.
    Beach,
    /// Campsites and van parks.
    Campsite,
    /// Scenic lookouts and attractions.
    Viewpoint,
    /// Parks and trailheads.
    Hiking,
    /// Budget lodging.
    Hostel,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Beach,
        Self::Campsite,
        Self::Viewpoint,
        Self::Hiking,
        Self::Hostel,
    ];

    /// Return the category label used by the dataset.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beach => "Beach",
            Self::Campsite => "Campsite",
            Self::Viewpoint => "Viewpoint",
            Self::Hiking => "Hiking",
            Self::Hostel => "Hostel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category label matches none of the known kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown location category '{label}'")]
pub struct UnknownCategory {
    /// Label as it appeared in the input.
    pub label: String,
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory {
                label: trimmed.to_owned(),
            })
    }
}

/// Ranking signals attached to a location.
///
/// Values are canonicalised on construction: anything non-finite or negative
/// becomes `0.0`, ratings are capped at [`MAX_RATING`] and amenity scores at
/// [`MAX_AMENITY_SCORE`]. A missing signal is therefore indistinguishable from
/// a zero one.
///
/// # Examples
/// ```
/// use portuvan_core::Signals;
///
/// let signals = Signals::new(f64::NAN, 120, -4.0);
/// assert_eq!(signals.rating(), 0.0);
/// assert_eq!(signals.review_count(), 120);
/// assert_eq!(signals.amenity_score(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signals {
    rating: f64,
    review_count: u64,
    amenity_score: f64,
}

impl Signals {
    /// Build canonical signals from raw values.
    pub fn new(rating: f64, review_count: u64, amenity_score: f64) -> Self {
        Self {
            rating: canonical_measure(rating, MAX_RATING),
            review_count,
            amenity_score: canonical_measure(amenity_score, MAX_AMENITY_SCORE),
        }
    }

    /// Star rating in `0.0..=5.0`.
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Number of user reviews behind the rating.
    pub const fn review_count(&self) -> u64 {
        self.review_count
    }

    /// Nature/outdoor density score in `0.0..=100.0`.
    pub const fn amenity_score(&self) -> f64 {
        self.amenity_score
    }
}

fn canonical_measure(value: f64, max: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    value.min(max)
}

/// A point of interest supplied by the ingestion collaborator.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portuvan_core::{Category, Location, Signals};
///
/// let location = Location::new(
///     "Praia da Marinha",
///     Coord { x: -8.41, y: 37.09 },
///     Category::Beach,
///     Signals::new(4.8, 1_000, 50.0),
/// );
/// assert_eq!(location.latitude(), 37.09);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    /// Unique display name.
    pub name: String,
    /// WGS84 position.
    pub coord: Coord<f64>,
    /// Kind of place.
    pub category: Category,
    /// Ranking inputs.
    pub signals: Signals,
    /// Optional photo handle from the places service.
    pub photo_reference: Option<String>,
}

impl Location {
    /// Construct a location without a photo reference.
    pub fn new(
        name: impl Into<String>,
        coord: Coord<f64>,
        category: Category,
        signals: Signals,
    ) -> Self {
        Self {
            name: name.into(),
            coord,
            category,
            signals,
            photo_reference: None,
        }
    }

    /// Attach a photo reference while returning `self` for chaining.
    #[must_use]
    pub fn with_photo_reference(mut self, reference: impl Into<String>) -> Self {
        self.photo_reference = Some(reference.into());
        self
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.coord.x
    }
}

/// A location paired with its derived desirability score.
///
/// The score is never stored by the ingestion side; it is recomputed each
/// time a dataset is loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredLocation {
    /// Underlying record.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: Location,
    /// Desirability score; finite and non-negative.
    pub score: f64,
}

impl ScoredLocation {
    /// Pair a location with a score, zeroing non-finite or negative scores.
    pub fn new(location: Location, score: f64) -> Self {
        let score = if score.is_finite() { score.max(0.0) } else { 0.0 };
        Self { location, score }
    }

    /// Shortcut for the underlying signals.
    pub const fn signals(&self) -> &Signals {
        &self.location.signals
    }

    /// Ranking order: higher score first, ties broken by name.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use geo::Coord;
    /// use portuvan_core::{Category, Location, ScoredLocation, Signals};
    ///
    /// let make = |name: &str, score| {
    ///     let coord = Coord { x: -8.0, y: 38.0 };
    ///     ScoredLocation::new(Location::new(name, coord, Category::Beach, Signals::default()), score)
    /// };
    /// assert_eq!(make("B", 9.0).rank_cmp(&make("A", 3.0)), Ordering::Less);
    /// assert_eq!(make("A", 3.0).rank_cmp(&make("B", 3.0)), Ordering::Less);
    /// ```
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.location.name.cmp(&other.location.name))
    }
}
