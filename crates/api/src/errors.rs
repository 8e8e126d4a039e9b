//! HTTP error mapping
//!
//! Every failure leaves the API as `{"detail": "..."}`. Caller mistakes are
//! 400 Bad Request; anything else is a 500 whose detail hides the cause.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mergington_common::ErrorClassification;
use mergington_domain::MergingtonError;
use serde::Serialize;
use thiserror::Error;

use crate::utils::logging::error_label;

/// Error returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] MergingtonError),

    #[error("missing required query parameter: {0}")]
    MissingParameter(&'static str),

    /// Query string that does not deserialize (e.g. a repeated parameter)
    #[error("invalid query string: {0}")]
    InvalidQuery(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

/// JSON error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingParameter(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::Domain(err) => err.detail(),
            Self::MissingParameter(_) | Self::InvalidQuery(_) => self.to_string(),
        }
    }

    /// Stable label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Domain(err) => error_label(err),
            Self::MissingParameter(_) => "missing_parameter",
            Self::InvalidQuery(_) => "invalid_query",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, label = self.label(), "request failed");
        }
        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
