//! Record matching logic.
//!
//! # Responsibilities
//! - Match country name (exact, case-sensitive)
//! - Match year (exact integer)
//! - Match regime type and region (normalized comparison)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Needles are normalized once at construction, never per record
//! - A year that failed to parse matches nothing
//! - Matchers borrow records; they never mutate them

use crate::dataset::Record;
use crate::query::normalize::{normalize, parse_year};

/// Trait for matching records against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the record matches this condition.
    fn matches(&self, record: &Record) -> bool;
}

/// Matches every record.
#[derive(Debug, Clone, Default)]
pub struct AllMatcher;

impl Matcher for AllMatcher {
    fn matches(&self, _record: &Record) -> bool {
        true
    }
}

/// Matches `country_name` exactly.
#[derive(Debug, Clone)]
pub struct CountryMatcher {
    country: String,
}

impl CountryMatcher {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

impl Matcher for CountryMatcher {
    fn matches(&self, record: &Record) -> bool {
        record.country_name() == self.country
    }
}

/// Matches `year` exactly.
#[derive(Debug, Clone)]
pub struct YearMatcher {
    year: Option<i64>,
}

impl YearMatcher {
    /// Build from a raw path segment. Unparseable input matches nothing.
    pub fn parse(segment: &str) -> Self {
        Self {
            year: parse_year(segment),
        }
    }
}

impl Matcher for YearMatcher {
    fn matches(&self, record: &Record) -> bool {
        self.year == Some(record.year())
    }
}

/// Matches `v2x_regime` after normalization.
#[derive(Debug, Clone)]
pub struct RegimeTypeMatcher {
    key: String,
}

impl RegimeTypeMatcher {
    pub fn new(label: &str) -> Self {
        Self {
            key: normalize(label),
        }
    }
}

impl Matcher for RegimeTypeMatcher {
    fn matches(&self, record: &Record) -> bool {
        normalize(record.regime_type()) == self.key
    }
}

/// Matches `e_regionpol` after normalization.
#[derive(Debug, Clone)]
pub struct RegionMatcher {
    key: String,
}

impl RegionMatcher {
    pub fn new(label: &str) -> Self {
        Self {
            key: normalize(label),
        }
    }
}

impl Matcher for RegionMatcher {
    fn matches(&self, record: &Record) -> bool {
        normalize(record.region()) == self.key
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, record: &Record) -> bool {
        self.matchers.iter().all(|m| m.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn argentina() -> Record {
        serde_json::from_value(json!({
            "country_name": "Argentina",
            "year": 2021,
            "v2x_regime": "Electoral democracy",
            "e_regionpol": "Latin America"
        }))
        .unwrap()
    }

    #[test]
    fn test_country_matcher_is_exact() {
        let record = argentina();
        assert!(CountryMatcher::new("Argentina").matches(&record));
        assert!(!CountryMatcher::new("argentina").matches(&record));
        assert!(!CountryMatcher::new("Argentina ").matches(&record));
    }

    #[test]
    fn test_year_matcher() {
        let record = argentina();
        assert!(YearMatcher::parse("2021").matches(&record));
        assert!(YearMatcher::parse("0x7E5").matches(&record));
        assert!(!YearMatcher::parse("2020").matches(&record));
        assert!(!YearMatcher::parse("not-a-number").matches(&record));
    }

    #[test]
    fn test_label_matchers_normalize_both_sides() {
        let record = argentina();
        assert!(RegimeTypeMatcher::new("electoraldemocracy").matches(&record));
        assert!(RegimeTypeMatcher::new("ELECTORAL Democracy").matches(&record));
        assert!(!RegimeTypeMatcher::new("electoral").matches(&record));

        assert!(RegionMatcher::new("latinamerica").matches(&record));
        assert!(RegionMatcher::new("Latin  America").matches(&record));
        assert!(!RegionMatcher::new("latin-america").matches(&record));
    }

    #[test]
    fn test_and_matcher() {
        let record = argentina();
        let both = AndMatcher::new(vec![
            Box::new(CountryMatcher::new("Argentina")),
            Box::new(YearMatcher::parse("2021")),
        ]);
        assert!(both.matches(&record));

        let wrong_year = AndMatcher::new(vec![
            Box::new(CountryMatcher::new("Argentina")),
            Box::new(YearMatcher::parse("2000")),
        ]);
        assert!(!wrong_year.matches(&record));

        assert!(AndMatcher::new(Vec::new()).matches(&record));
    }

    #[test]
    fn test_label_matchers_tolerate_missing_labels() {
        let record: Record =
            serde_json::from_value(json!({"country_name": "Kosovo", "year": 2005, "v2x_regime": null}))
                .unwrap();
        assert!(!RegimeTypeMatcher::new("electoraldemocracy").matches(&record));
        assert!(!RegionMatcher::new("latinamerica").matches(&record));
        assert!(RegionMatcher::new(" ").matches(&record));
    }
}
