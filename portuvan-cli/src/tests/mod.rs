//! Shared test harness modules for the PortuVan CLI.

use super::*;

mod helpers;
