//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the metrics exporter when enabled
//! - Load the dataset (fatal on failure)
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener is bound last, so no connection is accepted before the
//!   dataset is in memory

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::ApiConfig;
use crate::dataset::{Dataset, DatasetError};
use crate::http::ApiServer;
use crate::observability::metrics;

/// Anything that stops the service from coming up or keeps it from serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bring the service up and serve until shutdown.
pub async fn start(
    config: ApiConfig,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        dataset = %config.dataset.path,
        request_timeout_secs = config.timeouts.request_secs,
        cors = config.cors.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Some(addr) = config.observability.metrics_socket_addr() {
            metrics::init_metrics(addr)?;
        }
    }

    let dataset = Dataset::load(&config.dataset.path)?;
    metrics::record_dataset(dataset.len());

    let address = config.listener.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    ApiServer::new(config, dataset)
        .run(listener, shutdown)
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    #[tokio::test]
    async fn test_missing_dataset_is_fatal() {
        let mut config = ApiConfig::default();
        config.listener.host = "127.0.0.1".into();
        config.dataset.path = "/no/such/dir/trip.json".into();

        let shutdown = Shutdown::new();
        let err = start(config, shutdown.subscribe()).await.unwrap_err();
        assert!(matches!(err, StartupError::Dataset(DatasetError::Io { .. })));
    }
}
