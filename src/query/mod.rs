//! Query subsystem.
//!
//! # Data Flow
//! ```text
//! Path segments (country, year, regime type, region)
//!     → filter.rs (Query per endpoint shape)
//!     → matcher.rs (compile predicate, normalize needles once)
//!     → linear scan over Dataset
//!     → Vec<&Record> in dataset order
//! ```
//!
//! # Design Decisions
//! - No index: the dataset is small and a scan is deterministic
//! - Results borrow from the dataset; nothing is copied until serialization
//! - Parse failures degrade to zero results, never to errors

pub mod filter;
pub mod matcher;
pub mod normalize;

pub use filter::Query;
pub use matcher::Matcher;
pub use normalize::{normalize, parse_year};
