//! Trans Rights Indicator Project (TRIP) API
//!
//! Read-only JSON API over the TRIP country-year dataset.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────────┐
//!                    │                       TRIP API                        │
//!                    │                                                       │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌──────────────┐     │
//!   ─────────────────┼─▶│  http   │───▶│ handlers │───▶│    query     │     │
//!                    │  │ server  │    │          │    │ matcher/scan │     │
//!                    │  └─────────┘    └──────────┘    └──────┬───────┘     │
//!                    │                                         │             │
//!                    │                                         ▼             │
//!   Client Response  │  ┌─────────┐                    ┌──────────────┐     │
//!   ◀────────────────┼──│envelope │◀───────────────────│   dataset    │     │
//!                    │  │response │                    │ Arc<[Record]>│     │
//!                    │  └─────────┘                    └──────────────┘     │
//!                    │                                                       │
//!                    │  ┌─────────────────────────────────────────────────┐ │
//!                    │  │ config │ observability │ lifecycle (start/stop) │ │
//!                    │  └─────────────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use trip_api::config::load_from_env;
use trip_api::lifecycle::{self, Shutdown};
use trip_api::observability::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability.log_level);
    tracing::info!("trip-api v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    match lifecycle::start(config, shutdown.subscribe()).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal startup error");
            ExitCode::FAILURE
        }
    }
}
