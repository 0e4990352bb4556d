//! Property-based tests for the desirability score.
//!
//! # Invariants tested
//!
//! - **Neutral reviews:** with no reviews the score is the amenity bonus.
//! - **Monotonicity:** the score never decreases as rating or review count
//!   grows.
//! - **Totality:** any input, however malformed, scores finite and
//!   non-negative.
//! - **Idempotence:** scoring twice yields bit-identical results.

use portuvan_core::Signals;
use portuvan_scorer::{AMENITY_DIVISOR, desirability_score};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = f64> {
    0.0_f64..=5.0
}

fn amenity() -> impl Strategy<Value = f64> {
    0.0_f64..=100.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: zero reviews collapse the logarithmic term.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "expected value is a float quotient")]
    fn zero_reviews_score_the_amenity_bonus(r in rating(), a in amenity()) {
        let score = desirability_score(&Signals::new(r, 0, a));
        let expected = a / AMENITY_DIVISOR;
        prop_assert!((score - expected).abs() < 1e-12, "got {score}, expected {expected}");
    }

    /// Property: raising the rating never lowers the score.
    #[test]
    fn score_is_monotone_in_rating(
        first in rating(),
        second in rating(),
        reviews in 0_u64..100_000,
        a in amenity(),
    ) {
        let (low, high) = if first <= second { (first, second) } else { (second, first) };
        let lower = desirability_score(&Signals::new(low, reviews, a));
        let higher = desirability_score(&Signals::new(high, reviews, a));
        prop_assert!(lower <= higher, "{lower} > {higher}");
    }

    /// Property: more reviews never lower the score.
    #[test]
    fn score_is_monotone_in_reviews(
        r in rating(),
        few in 0_u64..1_000_000,
        extra in 0_u64..1_000_000,
        a in amenity(),
    ) {
        let lower = desirability_score(&Signals::new(r, few, a));
        let higher = desirability_score(&Signals::new(r, few + extra, a));
        prop_assert!(lower <= higher, "{lower} > {higher}");
    }

    /// Property: arbitrary floats, including NaN and infinities, score finite.
    #[test]
    fn malformed_inputs_score_finite(r in any::<f64>(), reviews in any::<u64>(), a in any::<f64>()) {
        let score = desirability_score(&Signals::new(r, reviews, a));
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    /// Property: scoring is a pure function.
    #[test]
    fn scoring_is_idempotent(r in any::<f64>(), reviews in any::<u64>(), a in any::<f64>()) {
        let signals = Signals::new(r, reviews, a);
        let first = desirability_score(&signals);
        let second = desirability_score(&signals);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
