//! Country-year observation record.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// A source row that lacks the fields every query depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("`country_name` must be a string")]
    CountryName,

    #[error("`year` must be an integer")]
    Year,

    #[error("`{0}` must be a string or null")]
    Label(&'static str),
}

/// One row of the dataset.
///
/// The source object is kept exactly as read, key order and null labels
/// included, and is what gets serialized back. The identifying fields are
/// extracted once so filters never touch the raw map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Record {
    country_name: String,
    year: i64,
    regime_type: Option<String>,
    region: Option<String>,
    fields: Map<String, Value>,
}

impl Record {
    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// `v2x_regime`, or `""` when the source has none.
    pub fn regime_type(&self) -> &str {
        self.regime_type.as_deref().unwrap_or_default()
    }

    /// `e_regionpol`, or `""` when the source has none.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or_default()
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let country_name = match fields.get("country_name") {
            Some(Value::String(name)) => name.clone(),
            _ => return Err(RecordError::CountryName),
        };
        let year = fields
            .get("year")
            .and_then(Value::as_i64)
            .ok_or(RecordError::Year)?;

        Ok(Self {
            country_name,
            year,
            regime_type: label(&fields, "v2x_regime")?,
            region: label(&fields, "e_regionpol")?,
            fields,
        })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn label(fields: &Map<String, Value>, key: &'static str) -> Result<Option<String>, RecordError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RecordError::Label(key)),
    }
}
