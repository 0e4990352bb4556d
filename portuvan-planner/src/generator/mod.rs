//! Banded itinerary sampling.

use portuvan_core::{
    BandSelection, GeographicBand, Itinerary, PreferenceMode, ScoredLocation, Stop, StopChooser,
};

use crate::config::{PlannerConfig, PlannerConfigError};

/// Builds itineraries by sampling one stop per geographic band.
///
/// The generator holds only configuration. Every call to
/// [`generate`](Self::generate) returns a fresh [`Itinerary`]; callers own
/// any state that must outlive a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryGenerator {
    config: PlannerConfig,
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }
}

impl ItineraryGenerator {
    /// Construct a generator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerConfigError`] when the configuration is unusable.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Sample an itinerary from `locations`.
    ///
    /// Locations failing `preference` are discarded first. Each band then
    /// contributes at most one stop, in band order; a band with no
    /// qualifying candidate is skipped. An empty dataset yields just the two
    /// endpoints.
    ///
    /// # Examples
    /// ```
    /// use portuvan_core::PreferenceMode;
    /// use portuvan_core::test_support::{FirstChooser, scored_location};
    /// use portuvan_planner::ItineraryGenerator;
    ///
    /// let locations = vec![scored_location("Comporta", 38.3, 9.0)];
    /// let itinerary = ItineraryGenerator::default().generate(
    ///     &locations,
    ///     PreferenceMode::Balanced,
    ///     &mut FirstChooser,
    /// );
    /// let names: Vec<&str> = itinerary.stops().iter().map(|s| s.name()).collect();
    /// assert_eq!(names, vec!["Lisbon", "Comporta", "Porto"]);
    /// ```
    #[must_use]
    pub fn generate<C>(
        &self,
        locations: &[ScoredLocation],
        preference: PreferenceMode,
        chooser: &mut C,
    ) -> Itinerary
    where
        C: StopChooser + ?Sized,
    {
        let candidates: Vec<&ScoredLocation> = locations
            .iter()
            .filter(|candidate| preference.admits(candidate.signals()))
            .collect();
        log::debug!(
            "{} of {} locations qualify under {preference}",
            candidates.len(),
            locations.len()
        );

        let visits: Vec<Stop> = self
            .config
            .bands
            .iter()
            .filter_map(|band| self.sample_band(band, &candidates, chooser))
            .collect();

        Itinerary::new(self.config.start.clone(), visits, self.config.end.clone())
    }

    fn sample_band<C>(
        &self,
        band: &GeographicBand,
        candidates: &[&ScoredLocation],
        chooser: &mut C,
    ) -> Option<Stop>
    where
        C: StopChooser + ?Sized,
    {
        let mut pool: Vec<&ScoredLocation> = candidates
            .iter()
            .copied()
            .filter(|candidate| band.contains(candidate.location.latitude()))
            .collect();
        if pool.is_empty() {
            log::debug!("band '{}' has no qualifying candidates; skipping", band.name);
            return None;
        }
        if band.selection == BandSelection::BestOf {
            pool.sort_by(|a, b| a.rank_cmp(b));
            pool.truncate(self.config.top_k);
        }
        let index = chooser.choose(pool.len());
        let picked = pool.get(index).or_else(|| pool.last())?;
        log::debug!(
            "band '{}' picked '{}' from {} candidates",
            band.name,
            picked.location.name,
            pool.len()
        );
        Some(Stop::Visit {
            band: band.name.clone(),
            location: (*picked).clone(),
        })
    }
}
