//! Error-to-response mapping for the HTTP handlers.
//!
//! Every error becomes a status code plus a JSON body with a
//! human-readable `error` field. Missing single resources map to 404,
//! rejected payloads to 400, repository failures to 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use vigor_domain as domain;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<domain::ReadError> for AppError {
    fn from(value: domain::ReadError) -> Self {
        AppError::Internal(value.to_string())
    }
}

impl From<domain::CreateError> for AppError {
    fn from(value: domain::CreateError) -> Self {
        AppError::Internal(value.to_string())
    }
}

impl From<domain::UpdateError> for AppError {
    fn from(value: domain::UpdateError) -> Self {
        AppError::Internal(value.to_string())
    }
}

impl From<domain::PropertyError> for AppError {
    fn from(value: domain::PropertyError) -> Self {
        AppError::Validation(value.to_string())
    }
}
