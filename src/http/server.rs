//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, CORS, metrics)
//! - Trim trailing slashes before routing, so `/all/` is `/all`
//! - Bind server to listener
//! - Stop gracefully on OS signal or internal shutdown trigger

use std::time::Duration;

use axum::{extract::Request, middleware, routing::get, Router, ServiceExt};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::dataset::Dataset;
use crate::http::handlers;
use crate::http::middleware::track_metrics;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::signals::wait_for_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct ApiState {
    dataset: Option<Dataset>,
    port: u16,
}

impl ApiState {
    /// State serving a loaded dataset.
    pub fn new(dataset: Dataset, port: u16) -> Self {
        Self {
            dataset: Some(dataset),
            port,
        }
    }

    /// Degraded state: every data route answers 500.
    pub fn unavailable(port: u16) -> Self {
        Self {
            dataset: None,
            port,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// The routed service with path normalization applied in front of it.
pub type App = NormalizePath<Router>;

/// HTTP server for the TRIP API.
pub struct ApiServer {
    app: App,
    config: ApiConfig,
}

impl ApiServer {
    /// Create a new HTTP server over a loaded dataset.
    pub fn new(config: ApiConfig, dataset: Dataset) -> Self {
        let state = ApiState::new(dataset, config.listener.port);
        Self::with_state(config, state)
    }

    pub fn with_state(config: ApiConfig, state: ApiState) -> Self {
        let app = build_router(&config, state);
        Self { app, config }
    }

    /// The fully layered service, for in-process use.
    pub fn app(&self) -> App {
        self.app.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once an OS shutdown signal arrives or `shutdown` fires, after
    /// in-flight requests have drained. Dropping the sender side does not stop
    /// the server.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, ServiceExt::<Request>::into_make_service(self.app))
            .with_graceful_shutdown(async move {
                let triggered = async {
                    // A dropped coordinator means no internal trigger, not a stop.
                    if shutdown.recv().await.is_err() {
                        std::future::pending::<()>().await;
                    }
                };

                tokio::select! {
                    _ = wait_for_signal() => {}
                    _ = triggered => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// Path normalization wraps the router; layers added with `Router::layer` run
/// after a route is chosen.
#[allow(deprecated)]
pub fn build_router(config: &ApiConfig, state: ApiState) -> App {
    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/all", get(handlers::all))
        .route("/country/{country}", get(handlers::by_country))
        .route(
            "/country/{country}/year/{year}",
            get(handlers::by_country_and_year),
        )
        .route("/year/{year}", get(handlers::by_year))
        .route("/regime_type/{regime_type}", get(handlers::by_regime_type))
        .route("/region/{region}", get(handlers::by_region))
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(middleware::from_fn(track_metrics));

    let router = if config.cors.enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    let router = router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            ))),
    );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
