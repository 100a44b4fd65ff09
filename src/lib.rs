//! Trans Rights Indicator Project (TRIP) API Library

pub mod config;
pub mod dataset;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod query;

pub use config::schema::ApiConfig;
pub use dataset::{Dataset, Record};
pub use http::{ApiServer, ApiState};
pub use lifecycle::Shutdown;
