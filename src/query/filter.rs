//! Filter engine: linear scans over the dataset.

use crate::dataset::{Dataset, Record};
use crate::query::matcher::{
    AllMatcher, AndMatcher, CountryMatcher, Matcher, RegimeTypeMatcher, RegionMatcher,
    YearMatcher,
};

/// One query shape per endpoint, built from raw path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    All,
    Country(String),
    Year(String),
    CountryYear { country: String, year: String },
    RegimeType(String),
    Region(String),
}

impl Query {
    /// Run the query against a dataset.
    pub fn run<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Record> {
        match self {
            Query::All => dataset.all(),
            Query::Country(country) => dataset.by_country(country),
            Query::Year(year) => dataset.by_year(year),
            Query::CountryYear { country, year } => dataset.by_country_and_year(country, year),
            Query::RegimeType(label) => dataset.by_regime_type(label),
            Query::Region(label) => dataset.by_region(label),
        }
    }
}

impl Dataset {
    /// Records satisfying `matcher`, in dataset order.
    pub fn select(&self, matcher: &dyn Matcher) -> Vec<&Record> {
        self.records()
            .iter()
            .filter(|record| matcher.matches(record))
            .collect()
    }

    /// Every record, unfiltered.
    pub fn all(&self) -> Vec<&Record> {
        self.select(&AllMatcher)
    }

    pub fn by_country(&self, name: &str) -> Vec<&Record> {
        self.select(&CountryMatcher::new(name))
    }

    /// `year` is a raw path segment; unparseable input yields no records.
    pub fn by_year(&self, year: &str) -> Vec<&Record> {
        self.select(&YearMatcher::parse(year))
    }

    pub fn by_country_and_year(&self, name: &str, year: &str) -> Vec<&Record> {
        self.select(&AndMatcher::new(vec![
            Box::new(CountryMatcher::new(name)),
            Box::new(YearMatcher::parse(year)),
        ]))
    }

    pub fn by_regime_type(&self, label: &str) -> Vec<&Record> {
        self.select(&RegimeTypeMatcher::new(label))
    }

    pub fn by_region(&self, label: &str) -> Vec<&Record> {
        self.select(&RegionMatcher::new(label))
    }
}
