//! Score locations from their ranking signals.
//!
//! The `Scorer` trait assigns a desirability score to a set of
//! [`Signals`](crate::Signals). Scores are comparable across the whole
//! dataset but carry no fixed upper bound.

use crate::Signals;

/// Calculate a desirability score from raw signals.
///
/// Higher scores indicate a more attractive stop. Implementations must be
/// thread-safe (`Send` + `Sync`) so a dataset can be scored across threads,
/// and must be pure: the same signals always yield the same score.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use portuvan_core::{Scorer, Signals};
///
/// struct RatingOnly;
///
/// impl Scorer for RatingOnly {
///     fn score(&self, signals: &Signals) -> f64 {
///         signals.rating()
///     }
/// }
///
/// assert_eq!(RatingOnly.score(&Signals::new(4.5, 10, 0.0)), 4.5);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `signals`.
    fn score(&self, signals: &Signals) -> f64;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite or negative values.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
