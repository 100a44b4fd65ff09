//! Dataset loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dataset::{Dataset, Record};

/// Error type for dataset loading. Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a JSON array of records, keeping file order.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Record> =
        serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let dataset = Dataset::from_records(records);
    let summary = dataset.summary();

    tracing::info!(
        path = %path.display(),
        records = summary.records,
        countries = summary.countries,
        first_year = ?summary.first_year,
        last_year = ?summary.last_year,
        "Dataset loaded"
    );

    Ok(dataset)
}
