//! Preference modes narrowing the candidate pool.
//!
//! Parsing is deliberately lenient: any label that is not recognised maps to
//! [`PreferenceMode::Balanced`] so a stale client setting never fails a
//! request.
//!
//! # Examples
//! ```
//! use portuvan_core::PreferenceMode;
//!
//! assert_eq!(PreferenceMode::from_label("Wild & Nature"), PreferenceMode::WildNature);
//! assert_eq!(PreferenceMode::from_label("surprise me"), PreferenceMode::Balanced);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::Signals;

/// Candidates must score strictly above this amenity value in
/// [`PreferenceMode::WildNature`].
pub const WILD_AMENITY_THRESHOLD: f64 = 70.0;

/// Candidates must have strictly more reviews than this in
/// [`PreferenceMode::PopularSocial`].
pub const POPULAR_REVIEW_THRESHOLD: u64 = 500;

/// Named filter applied before band sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PreferenceMode {
    /// No filtering.
    #[default]
    Balanced,
    /// Only amenity-dense, outdoorsy places.
    WildNature,
    /// Only well-reviewed places.
    PopularSocial,
}

impl PreferenceMode {
    /// Resolve a user-facing label, defaulting to `Balanced`.
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "balanced" => Self::Balanced,
            "wild" | "wildnature" | "nature" => Self::WildNature,
            "popular" | "popularsocial" | "social" => Self::PopularSocial,
            _ => {
                log::warn!("unrecognised preference mode '{label}'; using balanced");
                Self::Balanced
            }
        }
    }

    /// Human-readable label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::WildNature => "Wild & Nature",
            Self::PopularSocial => "Popular & Social",
        }
    }

    /// Report whether a location with `signals` qualifies under this mode.
    pub fn admits(self, signals: &Signals) -> bool {
        match self {
            Self::Balanced => true,
            Self::WildNature => signals.amenity_score() > WILD_AMENITY_THRESHOLD,
            Self::PopularSocial => signals.review_count() > POPULAR_REVIEW_THRESHOLD,
        }
    }
}

impl fmt::Display for PreferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Balanced", PreferenceMode::Balanced)]
    #[case("Wild & Nature", PreferenceMode::WildNature)]
    #[case("wild-nature", PreferenceMode::WildNature)]
    #[case("WildNature", PreferenceMode::WildNature)]
    #[case("Popular & Social", PreferenceMode::PopularSocial)]
    #[case("popular_social", PreferenceMode::PopularSocial)]
    #[case("", PreferenceMode::Balanced)]
    #[case("luxury", PreferenceMode::Balanced)]
    fn resolves_labels(#[case] label: &str, #[case] expected: PreferenceMode) {
        assert_eq!(PreferenceMode::from_label(label), expected);
    }

    #[rstest]
    fn display_round_trips_through_from_label() {
        for mode in [
            PreferenceMode::Balanced,
            PreferenceMode::WildNature,
            PreferenceMode::PopularSocial,
        ] {
            assert_eq!(PreferenceMode::from_label(&mode.to_string()), mode);
        }
    }

    #[rstest]
    #[case(70.0, false)]
    #[case(70.5, true)]
    fn wild_nature_threshold_is_strict(#[case] amenity: f64, #[case] admitted: bool) {
        let signals = Signals::new(4.0, 10, amenity);
        assert_eq!(PreferenceMode::WildNature.admits(&signals), admitted);
    }

    #[rstest]
    #[case(500, false)]
    #[case(501, true)]
    fn popular_social_threshold_is_strict(#[case] reviews: u64, #[case] admitted: bool) {
        let signals = Signals::new(4.0, reviews, 0.0);
        assert_eq!(PreferenceMode::PopularSocial.admits(&signals), admitted);
    }

    #[rstest]
    fn balanced_admits_everything() {
        assert!(PreferenceMode::Balanced.admits(&Signals::default()));
    }
}
