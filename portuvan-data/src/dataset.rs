//! CSV dataset loading.
//!
//! The dataset is a header-addressed CSV file with the columns `name`, `lat`,
//! `lon`, `type`, `rating`, `user_ratings_total`, `amenity_score` and
//! `photo_reference`. Column order is free and extra columns are ignored.
//!
//! Numeric signals are coerced leniently: empty, non-numeric or non-finite
//! values become `0`. Rows that cannot be placed on the map (bad
//! coordinates, unknown category, missing or repeated name) are skipped and
//! recorded in the [`DatasetReport`].

use std::collections::HashSet;
use std::fmt;
use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use portuvan_core::{Category, Location, Signals};
use serde::Deserialize;
use thiserror::Error;

use crate::fs::open_utf8_file;

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "lat", "lon", "type"];

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset {path}: {source}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the CSV stream failed.
    #[error("failed to read dataset: {source}")]
    Read {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// The header row lacks required columns.
    #[error("dataset is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Required columns absent from the header.
        columns: Vec<String>,
    },
}

/// Why a row was left out of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The name field was empty.
    MissingName,
    /// Latitude or longitude was missing, non-numeric or out of range.
    InvalidCoordinates {
        /// Raw latitude text.
        lat: String,
        /// Raw longitude text.
        lon: String,
    },
    /// The `type` column held an unknown category.
    UnknownCategory {
        /// Raw category text.
        label: String,
    },
    /// An earlier row already used this name.
    DuplicateName {
        /// Repeated name.
        name: String,
    },
    /// The CSV record itself could not be decoded.
    Malformed {
        /// Decoder message.
        message: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("missing name"),
            Self::InvalidCoordinates { lat, lon } => {
                write!(f, "invalid coordinates ({lat}, {lon})")
            }
            Self::UnknownCategory { label } => write!(f, "unknown category '{label}'"),
            Self::DuplicateName { name } => write!(f, "duplicate name '{name}'"),
            Self::Malformed { message } => write!(f, "malformed record: {message}"),
        }
    }
}

/// A row left out of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// One-based line number in the source, when known.
    pub line: Option<u64>,
    /// Why the row was skipped.
    pub reason: SkipReason,
}

/// Outcome counts for a dataset load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetReport {
    /// Data rows encountered, excluding the header.
    pub rows: usize,
    /// Rows turned into locations.
    pub loaded: usize,
    /// Rows left out, in source order.
    pub skipped: Vec<SkippedRow>,
}

impl DatasetReport {
    /// Number of skipped rows.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Locations loaded from a dataset together with the load report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Loaded locations in source order.
    pub locations: Vec<Location>,
    /// Load outcome.
    pub report: DatasetReport,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    name: String,
    lat: String,
    lon: String,
    #[serde(rename = "type")]
    kind: String,
    rating: String,
    user_ratings_total: String,
    amenity_score: String,
    photo_reference: String,
}

impl RawRecord {
    fn into_location(self) -> Result<Location, SkipReason> {
        if self.name.is_empty() {
            return Err(SkipReason::MissingName);
        }
        let coord = match (
            parse_coordinate(&self.lat, 90.0),
            parse_coordinate(&self.lon, 180.0),
        ) {
            (Some(y), Some(x)) => Coord { x, y },
            _ => {
                return Err(SkipReason::InvalidCoordinates {
                    lat: self.lat,
                    lon: self.lon,
                });
            }
        };
        let category: Category = self
            .kind
            .parse()
            .map_err(|_| SkipReason::UnknownCategory { label: self.kind })?;
        let signals = Signals::new(
            coerce_measure(&self.rating),
            coerce_count(&self.user_ratings_total),
            coerce_measure(&self.amenity_score),
        );
        let location = Location::new(self.name, coord, category, signals);
        if self.photo_reference.is_empty() {
            Ok(location)
        } else {
            Ok(location.with_photo_reference(self.photo_reference))
        }
    }
}

fn parse_coordinate(text: &str, limit: f64) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.abs() <= limit)
}

/// Coerce a numeric field, mapping anything unparsable or non-finite to `0.0`.
fn coerce_measure(text: &str) -> f64 {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Coerce a count field. Float text is truncated; negatives become `0`.
fn coerce_count(text: &str) -> u64 {
    if let Ok(count) = text.parse::<u64>() {
        return count;
    }
    let value = coerce_measure(text);
    if value > 0.0 { value as u64 } else { 0 }
}

/// Parse a dataset from any CSV byte stream.
///
/// # Errors
///
/// Returns [`DatasetError::MissingColumns`] when the header lacks a required
/// column and [`DatasetError::Read`] when the underlying stream fails.
/// Malformed rows are skipped, not reported as errors.
///
/// # Examples
/// ```
/// use portuvan_data::read_locations;
///
/// let csv = "name,lat,lon,type,rating,user_ratings_total,amenity_score\n\
///            Praia da Falesia,37.08,-8.16,Beach,4.8,N/A,55\n\
///            Nowhere,north,-8.0,Beach,4.0,1,1\n";
/// let dataset = read_locations(csv.as_bytes())?;
/// assert_eq!(dataset.locations.len(), 1);
/// assert_eq!(dataset.locations[0].signals.review_count(), 0);
/// assert_eq!(dataset.report.skipped_count(), 1);
/// # Ok::<(), portuvan_data::DatasetError>(())
/// ```
pub fn read_locations<R: Read>(input: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Read { source })?
        .clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(str::to_owned)
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns { columns: missing });
    }

    let mut dataset = Dataset::default();
    let mut seen = HashSet::new();
    for result in reader.records() {
        dataset.report.rows += 1;
        let outcome = match result {
            Ok(record) => {
                let line = record.position().map(csv::Position::line);
                let parsed = record
                    .deserialize::<RawRecord>(Some(&headers))
                    .map_err(|err| SkipReason::Malformed {
                        message: err.to_string(),
                    })
                    .and_then(RawRecord::into_location)
                    .and_then(|location| {
                        if seen.insert(location.name.clone()) {
                            Ok(location)
                        } else {
                            Err(SkipReason::DuplicateName {
                                name: location.name,
                            })
                        }
                    });
                parsed.map_err(|reason| SkippedRow { line, reason })
            }
            Err(err) if err.is_io_error() => return Err(DatasetError::Read { source: err }),
            Err(err) => Err(SkippedRow {
                line: err.position().map(csv::Position::line),
                reason: SkipReason::Malformed {
                    message: err.to_string(),
                },
            }),
        };
        match outcome {
            Ok(location) => dataset.locations.push(location),
            Err(skipped) => {
                match skipped.line {
                    Some(line) => log::warn!("skipping dataset line {line}: {}", skipped.reason),
                    None => log::warn!("skipping dataset row: {}", skipped.reason),
                }
                dataset.report.skipped.push(skipped);
            }
        }
    }
    dataset.report.loaded = dataset.locations.len();
    log::info!(
        "loaded {} of {} dataset rows ({} skipped)",
        dataset.report.loaded,
        dataset.report.rows,
        dataset.report.skipped_count()
    );
    Ok(dataset)
}

/// Load a dataset from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError::Open`] when the file cannot be opened, otherwise
/// the errors of [`read_locations`].
pub fn load_locations(path: &Utf8Path) -> Result<Dataset, DatasetError> {
    let file = open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("reading dataset from {path}");
    read_locations(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HEADER: &str =
        "name,lat,lon,type,rating,user_ratings_total,photo_reference,amenity_score\n";

    fn read(body: &str) -> Dataset {
        read_locations(format!("{HEADER}{body}").as_bytes())
            .unwrap_or_else(|err| panic!("dataset should parse: {err}"))
    }

    #[rstest]
    #[case("", 0.0)]
    #[case("N/A", 0.0)]
    #[case("nan", 0.0)]
    #[case("inf", 0.0)]
    #[case("4.5", 4.5)]
    #[case("-3", -3.0)]
    fn coerces_measures(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(coerce_measure(text), expected);
    }

    #[rstest]
    #[case("", 0)]
    #[case("600", 600)]
    #[case("600.0", 600)]
    #[case("12.9", 12)]
    #[case("-4", 0)]
    #[case("lots", 0)]
    fn coerces_counts(#[case] text: &str, #[case] expected: u64) {
        assert_eq!(coerce_count(text), expected);
    }

    #[rstest]
    fn loads_a_complete_row() {
        let dataset = read("Praia da Marinha,37.09,-8.41,Beach,4.8,1000,abc123,50\n");
        let Some(location) = dataset.locations.first() else {
            panic!("row should load")
        };
        assert_eq!(location.name, "Praia da Marinha");
        assert_eq!(location.coord, Coord { x: -8.41, y: 37.09 });
        assert_eq!(location.category, Category::Beach);
        assert_eq!(location.signals.review_count(), 1_000);
        assert_eq!(location.photo_reference.as_deref(), Some("abc123"));
    }

    #[rstest]
    fn column_order_is_free_and_optional_columns_may_be_absent() {
        let dataset = read_locations("type,lon,name,lat,extra\nCampsite,-8.7,Zambujeira,37.5,x\n".as_bytes())
            .unwrap_or_else(|err| panic!("dataset should parse: {err}"));
        let Some(location) = dataset.locations.first() else {
            panic!("row should load")
        };
        assert_eq!(location.name, "Zambujeira");
        assert_eq!(location.signals, Signals::default());
        assert_eq!(location.photo_reference, None);
    }

    #[rstest]
    fn skips_unplaceable_rows() {
        let dataset = read(concat!(
            ",38.0,-8.0,Beach,4,1,,1\n",
            "Nowhere,,-8.0,Beach,4,1,,1\n",
            "Offworld,95.0,-8.0,Beach,4,1,,1\n",
            "Museum,38.0,-8.0,Museum,4,1,,1\n",
            "Valid,38.0,-8.0,Hostel,4,1,,1\n",
            "Valid,39.0,-8.0,Hostel,5,1,,1\n",
        ));
        assert_eq!(dataset.report.rows, 6);
        assert_eq!(dataset.report.loaded, 1);
        let reasons: Vec<&SkipReason> = dataset.report.skipped.iter().map(|s| &s.reason).collect();
        assert!(matches!(reasons.first(), Some(SkipReason::MissingName)));
        assert!(matches!(reasons.get(1), Some(SkipReason::InvalidCoordinates { .. })));
        assert!(matches!(reasons.get(2), Some(SkipReason::InvalidCoordinates { .. })));
        assert!(matches!(reasons.get(3), Some(SkipReason::UnknownCategory { .. })));
        assert!(matches!(reasons.get(4), Some(SkipReason::DuplicateName { .. })));
    }

    #[rstest]
    fn duplicate_names_keep_the_first_row() {
        let dataset = read("Twin,38.0,-8.0,Beach,4,1,,1\nTwin,41.0,-8.0,Beach,5,9,,9\n");
        assert_eq!(dataset.locations.len(), 1);
        assert_eq!(dataset.locations.first().map(Location::latitude), Some(38.0));
    }

    #[rstest]
    fn skipped_rows_record_their_line() {
        let dataset = read("Good,38.0,-8.0,Beach,4,1,,1\nBad,x,y,Beach,4,1,,1\n");
        assert_eq!(dataset.report.skipped.first().and_then(|s| s.line), Some(3));
    }

    #[rstest]
    fn missing_required_columns_are_fatal() {
        let err = read_locations("name,lat\nA,38.0\n".as_bytes())
            .err()
            .unwrap_or_else(|| panic!("header without lon/type should fail"));
        match err {
            DatasetError::MissingColumns { columns } => assert_eq!(columns, vec!["lon", "type"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
