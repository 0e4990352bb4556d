//! Test helpers for writing datasets and stubbing routing.

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use portuvan_core::RouteSegmentProvider;
use portuvan_core::test_support::FixedRouteProvider;
use tempfile::TempDir;

use crate::CliError;
use crate::plan::{RouteProviderBuilder, RouteSource};

/// Seven locations covering every default band, one below the default rating
/// floor and one outside the pick categories. No Algarve location is
/// amenity-dense enough for the wild preference.
pub(super) const SAMPLE_DATASET: &str = "\
name,lat,lon,type,rating,user_ratings_total,amenity_score,photo_reference
Praia da Comporta,38.38,-8.80,Beach,4.6,2300,40,
Parque de Campismo Milfontes,37.72,-8.78,Campsite,4.2,900,85,
Praia da Marinha,37.09,-8.41,Beach,4.8,10432,55,ph_marinha
Miradouro da Ponta da Piedade,37.08,-8.67,Viewpoint,4.8,15000,30,
Parque de Campismo de Sagres,37.02,-8.94,Campsite,3.9,450,65,
Miradouro da Serra da Estrela,40.32,-7.61,Viewpoint,4.7,3100,90,
Hostel Peniche,39.36,-9.38,Hostel,4.6,389,40,
";

/// Distance returned for every leg by [`StubRouteProviderBuilder`].
pub(super) const STUB_LEG_METRES: f64 = 10_000.0;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary directory holding a copy of [`SAMPLE_DATASET`].
pub(super) struct SampleDataset {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl SampleDataset {
    pub(super) fn new() -> Self {
        Self::with_contents(SAMPLE_DATASET)
    }

    /// Write `csv` instead of the sample rows.
    pub(super) fn with_contents(csv: &str) -> Self {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non UTF-8 temp dir {}", path.display()));
        let path = root.join("trip_data.csv");
        write_utf8(&path, csv.as_bytes());
        Self { _dir: dir, path }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Builder answering every leg with a fixed ten kilometre, ten minute route.
#[derive(Debug, Default)]
pub(super) struct StubRouteProviderBuilder;

impl RouteProviderBuilder for StubRouteProviderBuilder {
    fn build(&self, _source: &RouteSource) -> Result<Box<dyn RouteSegmentProvider>, CliError> {
        Ok(Box::new(FixedRouteProvider::new(
            STUB_LEG_METRES,
            Duration::from_secs(600),
        )))
    }
}
