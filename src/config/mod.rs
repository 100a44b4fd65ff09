//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! TRIP_CONFIG (optional TOML file)
//!     → loader.rs (parse & deserialize, defaults for absent sections)
//!     → PORT override
//!     → validation.rs (semantic checks)
//!     → ApiConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::ApiConfig;
pub use schema::CorsConfig;
pub use schema::DatasetConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
