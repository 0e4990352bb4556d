//! Composite desirability score.
//!
//! `score = rating * log10(review_count + 1) + amenity_score / 25`
//!
//! The logarithm damps the value of additional reviews so a heavily reviewed
//! place does not swamp a well-rated one, and the amenity term contributes at
//! most four points.

use portuvan_core::{Location, ScoredLocation, Scorer, Signals};

/// Divisor mapping the `0..=100` amenity score onto a `0..=4` bonus.
pub const AMENITY_DIVISOR: f64 = 25.0;

/// Default [`Scorer`] applying the composite desirability formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesirabilityScorer;

impl Scorer for DesirabilityScorer {
    fn score(&self, signals: &Signals) -> f64 {
        desirability_score(signals)
    }
}

/// Score `signals` with the composite formula.
///
/// The result is always finite and non-negative. A location without reviews
/// scores its amenity bonus only.
///
/// # Examples
/// ```
/// use portuvan_core::Signals;
/// use portuvan_scorer::desirability_score;
///
/// assert_eq!(desirability_score(&Signals::new(4.8, 0, 50.0)), 2.0);
/// assert!((desirability_score(&Signals::new(5.0, 99, 0.0)) - 10.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the composite score is defined over floating-point signals"
)]
pub fn desirability_score(signals: &Signals) -> f64 {
    let reviews = signals.review_count() as f64;
    let popularity = signals.rating() * (reviews + 1.0).log10();
    let amenity_bonus = signals.amenity_score() / AMENITY_DIVISOR;
    DesirabilityScorer::sanitise(popularity + amenity_bonus)
}

/// Attach a score from `scorer` to every location.
///
/// Order is preserved. Scores are recomputed on every call; nothing is cached.
#[must_use]
pub fn score_locations<I, S>(locations: I, scorer: &S) -> Vec<ScoredLocation>
where
    I: IntoIterator<Item = Location>,
    S: Scorer + ?Sized,
{
    let scored: Vec<ScoredLocation> = locations
        .into_iter()
        .map(|location| {
            let score = scorer.score(&location.signals);
            ScoredLocation::new(location, score)
        })
        .collect();
    log::debug!("scored {} locations", scored.len());
    scored
}
