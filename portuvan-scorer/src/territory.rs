//! Territory summaries: region breakdowns and heat-map weights.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use portuvan_core::{Category, Location, ScoredLocation};
use serde::Serialize;
use thiserror::Error;

/// Coarse administrative region derived from latitude.
///
/// Variants are ordered south to north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    /// South of 37.2°.
    Algarve,
    /// 37.2° to 38.5°.
    Alentejo,
    /// 38.5° to 39.8°.
    CentroSul,
    /// 39.8° to 40.8°.
    CentroNorte,
    /// 40.8° and north.
    Norte,
}

impl Region {
    /// Every region, south to north.
    pub const ALL: [Self; 5] = [
        Self::Algarve,
        Self::Alentejo,
        Self::CentroSul,
        Self::CentroNorte,
        Self::Norte,
    ];

    /// Classify a latitude. Upper bounds are exclusive; `NaN` maps to `Norte`.
    #[must_use]
    pub fn for_latitude(latitude: f64) -> Self {
        if latitude < 37.2 {
            Self::Algarve
        } else if latitude < 38.5 {
            Self::Alentejo
        } else if latitude < 39.8 {
            Self::CentroSul
        } else if latitude < 40.8 {
            Self::CentroNorte
        } else {
            Self::Norte
        }
    }

    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Algarve => "Algarve",
            Self::Alentejo => "Alentejo",
            Self::CentroSul => "Centro Sul",
            Self::CentroNorte => "Centro Norte",
            Self::Norte => "Norte",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of locations of one category inside one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    /// Region counted.
    pub region: Region,
    /// Category counted.
    pub category: Category,
    /// Matching locations; zero when none.
    pub count: usize,
}

/// Count locations per region and category.
///
/// Every region × category pair is present, regions south to north and
/// categories in [`Category::ALL`] order.
#[must_use]
pub fn region_breakdown<'a, I>(locations: I) -> Vec<RegionCount>
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut counts: BTreeMap<(Region, Category), usize> = BTreeMap::new();
    for location in locations {
        let key = (Region::for_latitude(location.latitude()), location.category);
        *counts.entry(key).or_default() += 1;
    }
    Region::ALL
        .into_iter()
        .flat_map(|region| Category::ALL.into_iter().map(move |category| (region, category)))
        .map(|(region, category)| RegionCount {
            region,
            category,
            count: counts.get(&(region, category)).copied().unwrap_or_default(),
        })
        .collect()
}

/// Quantity used to weight heat-map points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HeatMetric {
    /// Desirability score, clipped below at zero.
    #[default]
    Score,
    /// `log10(review_count + 1)`.
    Reviews,
    /// Star rating.
    Rating,
}

impl HeatMetric {
    /// Lowercase label accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Reviews => "reviews",
            Self::Rating => "rating",
        }
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "review weights use a logarithmic scale"
    )]
    fn raw_weight(self, scored: &ScoredLocation) -> f64 {
        match self {
            Self::Score => scored.score.max(0.0),
            Self::Reviews => (scored.signals().review_count() as f64 + 1.0).log10(),
            Self::Rating => scored.signals().rating(),
        }
    }
}

impl fmt::Display for HeatMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a heat metric label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heat metric '{label}'; expected score, reviews or rating")]
pub struct UnknownHeatMetric {
    /// Label as supplied.
    pub label: String,
}

impl FromStr for HeatMetric {
    type Err = UnknownHeatMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "reviews" => Ok(Self::Reviews),
            "rating" => Ok(Self::Rating),
            _ => Err(UnknownHeatMetric {
                label: s.to_owned(),
            }),
        }
    }
}

/// A weighted point for heat-map rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatPoint {
    /// Location name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Weight in `0.0..=1.0`.
    pub weight: f64,
}

/// Weight every location by `metric`, normalised by the largest value.
///
/// When the largest value is not positive the raw weights are kept, so an
/// all-zero dataset yields all-zero weights.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "weights are normalised by the maximum raw value"
)]
pub fn heat_points(scored: &[ScoredLocation], metric: HeatMetric) -> Vec<HeatPoint> {
    let raw: Vec<f64> = scored.iter().map(|s| metric.raw_weight(s)).collect();
    let max = raw.iter().copied().fold(0.0_f64, f64::max);
    let divisor = if max > 0.0 { max } else { 1.0 };
    scored
        .iter()
        .zip(raw)
        .map(|(s, weight)| HeatPoint {
            name: s.location.name.clone(),
            latitude: s.location.latitude(),
            longitude: s.location.longitude(),
            weight: weight / divisor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use portuvan_core::Signals;
    use rstest::rstest;

    fn location(name: &str, latitude: f64, category: Category) -> Location {
        Location::new(
            name,
            Coord {
                x: -8.5,
                y: latitude,
            },
            category,
            Signals::default(),
        )
    }

    #[rstest]
    #[case(37.0, Region::Algarve)]
    #[case(37.2, Region::Alentejo)]
    #[case(38.49, Region::Alentejo)]
    #[case(38.5, Region::CentroSul)]
    #[case(39.8, Region::CentroNorte)]
    #[case(40.8, Region::Norte)]
    #[case(42.0, Region::Norte)]
    fn classifies_latitudes(#[case] latitude: f64, #[case] expected: Region) {
        assert_eq!(Region::for_latitude(latitude), expected);
    }

    #[rstest]
    fn breakdown_is_zero_filled() {
        let locations = [
            location("A", 37.0, Category::Beach),
            location("B", 37.1, Category::Beach),
            location("C", 41.0, Category::Hostel),
        ];
        let breakdown = region_breakdown(&locations);
        assert_eq!(breakdown.len(), Region::ALL.len() * Category::ALL.len());
        let count = |region, category| {
            breakdown
                .iter()
                .find(|c| c.region == region && c.category == category)
                .map_or(0, |c| c.count)
        };
        assert_eq!(count(Region::Algarve, Category::Beach), 2);
        assert_eq!(count(Region::Norte, Category::Hostel), 1);
        assert_eq!(count(Region::Alentejo, Category::Campsite), 0);
        assert_eq!(breakdown.first().map(|c| c.region), Some(Region::Algarve));
    }

    #[rstest]
    #[case("score", HeatMetric::Score)]
    #[case(" Reviews ", HeatMetric::Reviews)]
    #[case("RATING", HeatMetric::Rating)]
    fn parses_heat_metrics(#[case] label: &str, #[case] expected: HeatMetric) {
        assert_eq!(label.parse::<HeatMetric>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_heat_metric() {
        assert!("popularity".parse::<HeatMetric>().is_err());
    }

    #[rstest]
    fn heat_weights_are_normalised_by_maximum() {
        let scored = vec![
            ScoredLocation::new(location("A", 38.0, Category::Beach), 8.0),
            ScoredLocation::new(location("B", 39.0, Category::Beach), 2.0),
        ];
        let weights: Vec<f64> = heat_points(&scored, HeatMetric::Score)
            .into_iter()
            .map(|p| p.weight)
            .collect();
        assert_eq!(weights, vec![1.0, 0.25]);
    }

    #[rstest]
    fn all_zero_weights_stay_zero() {
        let scored = vec![ScoredLocation::new(location("A", 38.0, Category::Beach), 0.0)];
        let points = heat_points(&scored, HeatMetric::Reviews);
        assert_eq!(points.first().map(|p| p.weight), Some(0.0));
    }
}
