//! External collaborators for the PortuVan engine.
//!
//! Responsibilities:
//! - Load the location dataset from CSV, coercing malformed numeric fields
//!   to neutral values.
//! - Resolve driving legs against an OSRM routing service.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `portuvan-core`, `portuvan-scorer`
//!   and `portuvan-planner`).
//! - Keep blocking I/O off async executors; the routing client owns its own
//!   runtime.
//!
//! Invariants:
//! - Every loaded [`Location`](portuvan_core::Location) has finite WGS84
//!   coordinates and a unique name.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod dataset;
pub mod fs;
pub mod routing;

pub use dataset::{
    Dataset, DatasetError, DatasetReport, REQUIRED_COLUMNS, SkipReason, SkippedRow, load_locations,
    read_locations,
};
