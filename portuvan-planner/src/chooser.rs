//! Random stop selection.

use portuvan_core::StopChooser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// [`StopChooser`] drawing uniformly from a `ChaCha8` stream.
///
/// The same seed always yields the same sequence of choices, and therefore
/// the same itinerary for the same dataset and configuration.
///
/// # Examples
/// ```
/// use portuvan_core::StopChooser;
/// use portuvan_planner::SeededChooser;
///
/// let mut first = SeededChooser::from_seed(42);
/// let mut second = SeededChooser::from_seed(42);
/// assert_eq!(first.choose(10), second.choose(10));
/// ```
#[derive(Debug, Clone)]
pub struct SeededChooser {
    rng: ChaCha8Rng,
}

impl SeededChooser {
    /// Construct a reproducible chooser.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Construct a chooser seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl StopChooser for SeededChooser {
    fn choose(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
