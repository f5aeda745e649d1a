//! Request-scoped API errors.
//!
//! # Invariants
//! - A failed query answers its own request and never stops the server.
//! - Error bodies are JSON objects with a single `error` string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use people_core::RepoError;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::Internal(message) => message,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

impl Error for ApiError {}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::BadRequest(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::BadRequest(message) => warn!(
                "event=request_rejected module=http status={} error={}",
                status.as_u16(),
                message
            ),
            Self::Internal(message) => error!(
                "event=request_failed module=http status={} error={}",
                status.as_u16(),
                message
            ),
        }

        let body = Json(ErrorBody {
            error: self.message(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use people_core::{CountryCode, RepoError};

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = CountryCode::parse("U'S").unwrap_err();
        let api = ApiError::from(RepoError::from(err));
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert!(api.message().contains("U'S"));
    }

    #[test]
    fn data_errors_map_to_internal_error() {
        let api = ApiError::from(RepoError::InvalidData("bad row".to_string()));
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
