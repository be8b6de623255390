//! Error translation for the HTTP API
//!
//! Every failure leaves the handler as `{"error": ..., "kind": ...}` with a
//! matching status code; graph errors keep their kind name.

use super::types::ErrorResponse;
use crate::graph::GraphError;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Payload or query string that cannot be turned into a request
    #[error("Malformed request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Graph(GraphError::UnknownVertex(_)) => StatusCode::NOT_FOUND,
            ApiError::Graph(GraphError::NoPath { .. }) => StatusCode::NOT_FOUND,
            ApiError::Graph(GraphError::NegativeWeight { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Graph(GraphError::InvalidWeight(_)) => StatusCode::BAD_REQUEST,
            ApiError::Graph(GraphError::InvalidMode(_)) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Graph(err) => err.kind(),
            ApiError::BadRequest(_) => "BadRequest",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), kind = self.kind(), error = %self, "Request failed");
        let body = ErrorResponse {
            error: self.to_string(),
            kind: self.kind().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

/// Trim a label, rejecting it if nothing is left
pub fn require_label<'a>(field: &str, value: &'a str) -> ApiResult<&'a str> {
    let label = value.trim();
    if label.is_empty() {
        return Err(ApiError::BadRequest(format!("'{}' must be a non-empty label", field)));
    }
    Ok(label)
}
