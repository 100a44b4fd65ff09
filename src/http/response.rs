//! Response envelope.
//!
//! # Responsibilities
//! - Wrap every endpoint's output in `{success, message, body?}`
//! - Map "has results" / "no results" / "dataset unavailable" to 200 / 404 / 500
//! - Name the result list with the endpoint's body key
//!
//! # Design Decisions
//! - `body` is omitted, not null, on failure
//! - Records are serialized straight from the dataset borrow, no copies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dataset::Record;

pub const OK_MESSAGE: &str = "OK";
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// Uniform wrapper returned by every data endpoint.
#[derive(Debug, serde::Serialize)]
pub struct Envelope<T> {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

impl<T> Envelope<T> {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<'a> Envelope<ResultBody<'a>> {
    /// Successful lookup: `{success: true, message: "OK", body: {<key>: records}}`.
    pub fn found(key: &'static str, records: Vec<&'a Record>) -> Self {
        Self {
            status: StatusCode::OK,
            success: true,
            message: OK_MESSAGE,
            body: Some(ResultBody { key, records }),
        }
    }
}

impl Envelope<()> {
    /// Empty result set.
    pub fn not_found(message: &'static str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            success: false,
            message,
            body: None,
        }
    }

    /// Dataset unavailable.
    pub fn server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            success: false,
            message: SERVER_ERROR_MESSAGE,
            body: None,
        }
    }
}

impl<T: serde::Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// A result list serialized as a single-key object, e.g. `{"countryData": [...]}`.
#[derive(Debug)]
pub struct ResultBody<'a> {
    pub key: &'static str,
    pub records: Vec<&'a Record>,
}

impl Serialize for ResultBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.records)?;
        map.end()
    }
}

/// Found when `records` is non-empty, otherwise not found with `not_found`.
pub fn respond(key: &'static str, records: Vec<&Record>, not_found: &'static str) -> Response {
    if records.is_empty() {
        Envelope::not_found(not_found).into_response()
    } else {
        Envelope::found(key, records).into_response()
    }
}
