//! Dataset subsystem.
//!
//! # Data Flow
//! ```text
//! data/trip.json (JSON array, one object per country-year)
//!     → loader.rs (read & deserialize, fatal on error)
//!     → Dataset (Arc<[Record]>, frozen)
//!     → shared by handle with every request handler
//! ```
//!
//! # Design Decisions
//! - Loaded exactly once, before the listener is bound
//! - No mutating API: handlers only ever see `&[Record]`
//! - Cloning a `Dataset` clones the handle, never the rows

pub mod loader;
pub mod record;

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

pub use loader::{load_dataset, DatasetError};
pub use record::{Record, RecordError};

/// Immutable, ordered collection of records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
}

/// Counts logged once the dataset is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub records: usize,
    pub countries: usize,
    pub first_year: Option<i64>,
    pub last_year: Option<i64>,
}

impl Dataset {
    /// Freeze an in-memory sequence of records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Load the dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        load_dataset(path.as_ref())
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        let countries: BTreeSet<&str> = self
            .records
            .iter()
            .map(Record::country_name)
            .collect();

        DatasetSummary {
            records: self.records.len(),
            countries: countries.len(),
            first_year: self.records.iter().map(Record::year).min(),
            last_year: self.records.iter().map(Record::year).max(),
        }
    }
}
