//! Request handlers for the people endpoints.
//!
//! Every handler accepts any HTTP method. List responses are compact JSON
//! arrays; an empty result is `[]` on every endpoint.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use log::info;
use people_core::{CountryCount, Person};

pub const WELCOME_TEXT: &str = "Welcome to the HomePage!";

pub async fn home() -> &'static str {
    info!("event=endpoint_hit module=http endpoint=home");
    WELCOME_TEXT
}

pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = state.with_service(|service| service.list_people()).await?;
    Ok(Json(people))
}

/// Handles `/country/{rest}`: the code is `rest` up to the next `/`.
///
/// A remainder that does not decode to UTF-8 is a JSON `400`, like any
/// other malformed code.
pub async fn people_by_country(
    State(state): State<AppState>,
    rest: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let Path(rest) = rest.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let code = country_code_segment(&rest).to_string();
    let people = state
        .with_service(move |service| service.list_people_in_country(&code))
        .await?;
    Ok(Json(people))
}

pub async fn country_counts(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryCount>>, ApiError> {
    let counts = state.with_service(|service| service.country_counts()).await?;
    Ok(Json(counts))
}

/// Returns the path remainder up to (not including) its first `/`.
pub fn country_code_segment(rest: &str) -> &str {
    match rest.split_once('/') {
        Some((code, _)) => code,
        None => rest,
    }
}
