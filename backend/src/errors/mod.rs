//! Global application error types and handlers.
//!
//! `AppError` gathers the errors of every layer and turns them into JSON responses with
//! a machine-readable code, so handlers can use `?` throughout.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use confops_adapters::AdapterError;
use serde::Serialize;
use thiserror::Error;

use crate::auth::errors::AuthError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Directory(#[from] AdapterError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(AuthError::NoSession) => StatusCode::UNAUTHORIZED,
            AppError::Auth(AuthError::Forbidden(_)) => StatusCode::FORBIDDEN,
            AppError::Directory(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Auth(AuthError::NoSession) => "NO_SESSION",
            AppError::Auth(AuthError::Forbidden(_)) => "FORBIDDEN",
            AppError::Directory(_) | AppError::Io(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            tracing::debug!(error = %self, "request rejected");
            self.to_string()
        };

        let body = Json(ErrorResponse {
            code: self.code(),
            error,
        });
        (status, body).into_response()
    }
}
