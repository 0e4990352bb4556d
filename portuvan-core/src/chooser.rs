//! Pluggable selection of one candidate out of many.

/// Choose one index out of `len` candidates.
///
/// The itinerary generator never touches a random source directly; it asks a
/// chooser instead. Production code uses a seeded RNG, tests use scripted
/// choosers to pin the outcome.
///
/// Callers guarantee `len >= 1`. Implementations must return a value below
/// `len`; callers clamp anything larger to the last candidate.
///
/// # Examples
/// ```
/// use portuvan_core::StopChooser;
///
/// struct AlwaysLast;
///
/// impl StopChooser for AlwaysLast {
///     fn choose(&mut self, len: usize) -> usize {
///         len.saturating_sub(1)
///     }
/// }
///
/// assert_eq!(AlwaysLast.choose(4), 3);
/// ```
pub trait StopChooser {
    /// Return an index in `0..len`.
    fn choose(&mut self, len: usize) -> usize;
}

impl<C: StopChooser + ?Sized> StopChooser for &mut C {
    fn choose(&mut self, len: usize) -> usize {
        (**self).choose(len)
    }
}
