//! Per-category rankings and dashboard filtering.

use std::collections::BTreeSet;

use portuvan_core::{Category, Location, ScoredLocation};
use serde::Serialize;

/// Number of picks shown per category unless the caller asks otherwise.
pub const DEFAULT_PICK_LIMIT: usize = 5;

/// Minimum star rating applied by a default [`DashboardFilter`].
pub const DEFAULT_MIN_RATING: f64 = 4.0;

/// Categories featured in the top picks panel.
pub const PICK_CATEGORIES: [Category; 3] =
    [Category::Beach, Category::Campsite, Category::Viewpoint];

/// Return the best `limit` locations of `category`, highest score first.
///
/// Equal scores are ordered by name so the ranking is stable across loads.
#[must_use]
pub fn top_picks(
    scored: &[ScoredLocation],
    category: Category,
    limit: usize,
) -> Vec<&ScoredLocation> {
    let mut ranked: Vec<&ScoredLocation> = scored
        .iter()
        .filter(|candidate| candidate.location.category == category)
        .collect();
    ranked.sort_by(|a, b| a.rank_cmp(b));
    ranked.truncate(limit);
    ranked
}

/// Ranked picks for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPicks {
    /// Category ranked.
    pub category: Category,
    /// Best locations, highest score first.
    pub picks: Vec<ScoredLocation>,
}

/// Run [`top_picks`] for each of `categories`, preserving their order.
#[must_use]
pub fn top_picks_by_category(
    scored: &[ScoredLocation],
    categories: &[Category],
    limit: usize,
) -> Vec<CategoryPicks> {
    categories
        .iter()
        .map(|&category| CategoryPicks {
            category,
            picks: top_picks(scored, category, limit)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect()
}

/// Category and rating filter used by the exploration dashboard.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portuvan_core::{Category, Location, Signals};
/// use portuvan_scorer::DashboardFilter;
///
/// let filter = DashboardFilter::default().with_categories([Category::Beach]);
/// let beach = Location::new("Praia", Coord { x: -8.6, y: 37.1 }, Category::Beach, Signals::new(4.2, 10, 0.0));
/// assert!(filter.admits(&beach));
/// assert!(!filter.with_min_rating(4.5).admits(&beach));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFilter {
    categories: BTreeSet<Category>,
    min_rating: f64,
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            categories: Category::ALL.into_iter().collect(),
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

impl DashboardFilter {
    /// Restrict the filter to `categories`.
    #[must_use]
    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Require ratings of at least `min_rating`.
    #[must_use]
    pub const fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Selected categories.
    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    /// Minimum star rating.
    #[must_use]
    pub const fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Report whether `location` passes the filter.
    #[must_use]
    pub fn admits(&self, location: &Location) -> bool {
        self.categories.contains(&location.category)
            && location.signals.rating() >= self.min_rating
    }

    /// Keep the scored locations that pass the filter, in input order.
    #[must_use]
    pub fn apply<'a>(&self, scored: &'a [ScoredLocation]) -> Vec<&'a ScoredLocation> {
        scored
            .iter()
            .filter(|candidate| self.admits(&candidate.location))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use portuvan_core::Signals;
    use rstest::{fixture, rstest};

    fn scored(name: &str, category: Category, rating: f64, score: f64) -> ScoredLocation {
        ScoredLocation::new(
            Location::new(
                name,
                Coord { x: -8.5, y: 38.0 },
                category,
                Signals::new(rating, 100, 10.0),
            ),
            score,
        )
    }

    #[fixture]
    fn dataset() -> Vec<ScoredLocation> {
        vec![
            scored("Praia Norte", Category::Beach, 4.1, 7.0),
            scored("Praia Sul", Category::Beach, 4.6, 9.0),
            scored("Praia Centro", Category::Beach, 3.9, 7.0),
            scored("Parque", Category::Campsite, 4.8, 12.0),
            scored("Miradouro", Category::Viewpoint, 4.4, 5.0),
        ]
    }

    fn names(picks: &[&ScoredLocation]) -> Vec<String> {
        picks.iter().map(|p| p.location.name.clone()).collect()
    }

    #[rstest]
    fn ranks_by_score_then_name(dataset: Vec<ScoredLocation>) {
        let picks = top_picks(&dataset, Category::Beach, DEFAULT_PICK_LIMIT);
        assert_eq!(
            names(&picks),
            vec!["Praia Sul", "Praia Centro", "Praia Norte"]
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 3)]
    fn limit_caps_the_ranking(
        dataset: Vec<ScoredLocation>,
        #[case] limit: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(top_picks(&dataset, Category::Beach, limit).len(), expected);
    }

    #[rstest]
    fn picks_by_category_follow_requested_order(dataset: Vec<ScoredLocation>) {
        let panels = top_picks_by_category(&dataset, &PICK_CATEGORIES, 1);
        let categories: Vec<Category> = panels.iter().map(|p| p.category).collect();
        assert_eq!(categories, PICK_CATEGORIES.to_vec());
        assert!(panels.iter().all(|p| p.picks.len() == 1));
    }

    #[rstest]
    fn default_filter_applies_minimum_rating(dataset: Vec<ScoredLocation>) {
        let kept = DashboardFilter::default().apply(&dataset);
        assert_eq!(
            names(&kept),
            vec!["Praia Norte", "Praia Sul", "Parque", "Miradouro"]
        );
    }

    #[rstest]
    fn empty_category_selection_admits_nothing(dataset: Vec<ScoredLocation>) {
        let filter = DashboardFilter::default().with_categories([]);
        assert!(filter.apply(&dataset).is_empty());
    }
}
