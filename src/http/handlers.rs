//! Route handlers.
//!
//! Each data handler turns its path segments into a [`Query`], runs it against
//! the shared dataset and hands the matches to the envelope formatter.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::http::response::{respond, Envelope, ROUTE_NOT_FOUND_MESSAGE};
use crate::http::server::ApiState;
use crate::query::Query;

const WELCOME: &str = "Welcome! Trans Rights Indicator Project (TRIP) API provides insight into the legal situations transgender people faced in 173 countries from 2000 to 2021. The dataset currently includes 14 indicators that capture the presence or absence of laws related to criminalization, legal gender recognition, and anti-discrimination protections. Have a look around.";

/// Body key and empty-result message for one endpoint.
struct Endpoint {
    name: &'static str,
    key: &'static str,
    not_found: &'static str,
}

const COUNTRY: Endpoint = Endpoint {
    name: "country",
    key: "countryData",
    not_found: "Country not found",
};

const YEAR: Endpoint = Endpoint {
    name: "year",
    key: "yearData",
    not_found: "Year not found",
};

const COUNTRY_YEAR: Endpoint = Endpoint {
    name: "country_year",
    key: "countryYearData",
    not_found: "Country or year not found",
};

const REGIME_TYPE: Endpoint = Endpoint {
    name: "regime_type",
    key: "regimeTypeData",
    not_found: "Regime type not found",
};

const REGION: Endpoint = Endpoint {
    name: "region",
    key: "regionData",
    not_found: "Region not found",
};

fn answer(state: &ApiState, endpoint: &Endpoint, query: Query) -> Response {
    let Some(dataset) = state.dataset() else {
        tracing::error!(endpoint = endpoint.name, "Dataset unavailable");
        return Envelope::server_error().into_response();
    };

    let records = query.run(dataset);
    tracing::debug!(
        endpoint = endpoint.name,
        query = ?query,
        matches = records.len(),
        "Query executed"
    );

    respond(endpoint.key, records, endpoint.not_found)
}

/// `GET /`: route directory.
pub async fn index(State(state): State<ApiState>) -> Json<Value> {
    let base = format!("http://localhost:{}", state.port());
    Json(json!({
        "message": WELCOME,
        "routes": [{
            "/": "Index route. Information about all available routes.",
            "/all": "Returns all data from the JSON file.",
            "/country/:country": format!("Returns all data from a specific country. Example: {base}/country/Argentina"),
            "/year/:year": format!("Returns all data from a specific year. Example: {base}/year/2021"),
            "/country/:country/year/:year": format!("Returns all data from a specific country and year. Example: {base}/country/Argentina/year/2021"),
            "/regime_type/:regime_type": format!("Returns all data based on regime type. Example: {base}/regime_type/electoraldemocracy"),
            "/region/:region": format!("Returns all data based on region. Example: {base}/region/latinamerica"),
        }]
    }))
}

/// `GET /all`: the whole dataset, 200 even when it holds no rows.
pub async fn all(State(state): State<ApiState>) -> Response {
    let Some(dataset) = state.dataset() else {
        tracing::error!(endpoint = "all", "Dataset unavailable");
        return Envelope::server_error().into_response();
    };

    Envelope::found("allData", Query::All.run(dataset)).into_response()
}

/// `GET /country/{country}`
pub async fn by_country(State(state): State<ApiState>, Path(country): Path<String>) -> Response {
    answer(&state, &COUNTRY, Query::Country(country))
}

/// `GET /year/{year}`
pub async fn by_year(State(state): State<ApiState>, Path(year): Path<String>) -> Response {
    answer(&state, &YEAR, Query::Year(year))
}

/// `GET /country/{country}/year/{year}`
pub async fn by_country_and_year(
    State(state): State<ApiState>,
    Path((country, year)): Path<(String, String)>,
) -> Response {
    answer(&state, &COUNTRY_YEAR, Query::CountryYear { country, year })
}

/// `GET /regime_type/{regime_type}`
pub async fn by_regime_type(
    State(state): State<ApiState>,
    Path(regime_type): Path<String>,
) -> Response {
    answer(&state, &REGIME_TYPE, Query::RegimeType(regime_type))
}

/// `GET /region/{region}`
pub async fn by_region(State(state): State<ApiState>, Path(region): Path<String>) -> Response {
    answer(&state, &REGION, Query::Region(region))
}

/// Any path without a route.
pub async fn route_not_found() -> Response {
    Envelope::not_found(ROUTE_NOT_FOUND_MESSAGE).into_response()
}
