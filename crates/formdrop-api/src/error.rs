//! HTTP error response conversion
//!
//! Responses carry only the generic client message for each error class; the
//! full error text (including backend diagnostics) is logged server-side at
//! the variant's level before the response is built.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formdrop_core::{AppError, LogLevel};

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from formdrop-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let err = self.0;

        match err.log_level() {
            LogLevel::Debug => tracing::debug!(error = %err, "Request rejected"),
            LogLevel::Error => tracing::error!(error = %err, "Request failed"),
        }

        let status = StatusCode::from_u16(err.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, err.client_message()).into_response()
    }
}
