//! Shared fixtures for integration tests.

use std::net::SocketAddr;

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;
use trip_api::http::{build_router, App};
use trip_api::{ApiConfig, ApiServer, ApiState, Dataset, Shutdown};

/// Small dataset in source order. Argentina 2021 is unique per country-year.
pub const FIXTURE: &str = r#"[
    {"country_name": "Argentina", "country_text_id": "ARG", "year": 2020, "v2x_regime": "Electoral democracy", "e_regionpol": "Latin America", "legal_gender_recognition": 1},
    {"country_name": "Argentina", "country_text_id": "ARG", "year": 2021, "v2x_regime": "Electoral democracy", "e_regionpol": "Latin America", "legal_gender_recognition": 1},
    {"country_name": "Sweden", "country_text_id": "SWE", "year": 2021, "v2x_regime": "Liberal democracy", "e_regionpol": "Western Europe and North America", "legal_gender_recognition": 1},
    {"country_name": "Uruguay", "country_text_id": "URY", "year": 2021, "v2x_regime": "Liberal democracy", "e_regionpol": "Latin America", "legal_gender_recognition": 1},
    {"country_name": "Iran", "country_text_id": "IRN", "year": 2021, "v2x_regime": "Electoral autocracy", "e_regionpol": "Middle East and North Africa", "legal_gender_recognition": 1},
    {"country_name": "Saudi Arabia", "country_text_id": "SAU", "year": 2020, "v2x_regime": "Closed autocracy", "e_regionpol": "Middle East and North Africa", "legal_gender_recognition": 0}
]"#;

pub fn fixture_dataset() -> Dataset {
    Dataset::from_records(serde_json::from_str(FIXTURE).unwrap())
}

pub fn test_config() -> ApiConfig {
    let mut config = ApiConfig::default();
    config.listener.host = "127.0.0.1".into();
    config
}

#[allow(dead_code)]
pub fn router() -> App {
    build_router(&test_config(), ApiState::new(fixture_dataset(), 8080))
}

#[allow(dead_code)]
pub fn unavailable_router() -> App {
    build_router(&test_config(), ApiState::unavailable(8080))
}

/// Send a request through the router without a socket.
#[allow(dead_code)]
pub async fn send(router: App, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

#[allow(dead_code)]
pub async fn get(router: App, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

#[allow(dead_code)]
pub async fn get_json(router: App, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// Serve `dataset` on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_server(
    dataset: Dataset,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = test_config();
    config.listener.port = addr.port();

    let shutdown = Shutdown::new();
    let server = ApiServer::new(config, dataset);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    (addr, shutdown, handle)
}
