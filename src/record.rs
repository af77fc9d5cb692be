//! Typed accident rows and the per-year table they are loaded into.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Longitudes above this value mark an unknown location.
pub const LONGITUDE_SENTINEL: f64 = 900.0;
/// Latitudes above this value mark an unknown location.
pub const LATITUDE_SENTINEL: f64 = 90.0;

/// Columns every accident file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &["MONTH", "STATE", "LONGITUD", "LATITUDE"];

/// One fatal crash as read from a FARS accident file.
///
/// Only the columns used here are kept; the rest of the row is ignored.
/// Coordinates that are blank or unparsable load as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccidentRecord {
    #[serde(rename = "STATE")]
    pub state: u32,
    #[serde(rename = "MONTH")]
    pub month: u8,
    #[serde(rename = "YEAR", default, deserialize_with = "csv::invalid_option")]
    pub year: Option<i32>,
    #[serde(rename = "LONGITUD", deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    #[serde(rename = "LATITUDE", deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
}

/// A usable accident location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl AccidentRecord {
    /// Returns the crash location, or `None` when either coordinate is
    /// missing, non-finite or one of the source's "unknown" sentinels.
    pub fn location(&self) -> Option<GeoPoint> {
        let longitude = self.longitude?;
        let latitude = self.latitude?;

        if !longitude.is_finite() || !latitude.is_finite() {
            return None;
        }
        if longitude > LONGITUDE_SENTINEL || latitude > LATITUDE_SENTINEL {
            return None;
        }

        Some(GeoPoint {
            longitude,
            latitude,
        })
    }
}

/// All accident rows of one file, in file order.
#[derive(Debug, Clone)]
pub struct AccidentTable {
    path: PathBuf,
    records: Vec<AccidentRecord>,
}

impl AccidentTable {
    pub fn new(path: impl Into<PathBuf>, records: Vec<AccidentRecord>) -> Self {
        Self {
            path: path.into(),
            records,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[AccidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any row carries `state` in its STATE column.
    pub fn contains_state(&self, state: u32) -> bool {
        self.records.iter().any(|r| r.state == state)
    }

    /// Rows belonging to `state`, in file order.
    pub fn for_state(&self, state: u32) -> Vec<&AccidentRecord> {
        self.records.iter().filter(|r| r.state == state).collect()
    }

    /// Row count per state code, ordered by code.
    pub fn state_counts(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for r in &self.records {
            *counts.entry(r.state).or_insert(0) += 1;
        }
        counts
    }
}
