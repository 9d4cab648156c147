//! Mapping domain errors onto HTTP responses
//!
//! Every failure is answered with `{"error": "<message>", "code": "E####"}`
//! and the status its error code maps to. Server-side failures hide their
//! message from the client and are logged instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use recipegen_core::Error;
use serde_json::json;

/// Handler error
#[derive(Debug)]
pub struct AppError(pub Error);

pub type AppResult<T> = std::result::Result<T, AppError>;

impl From<Error> for AppError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = StatusCode::from_u16(error.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if error.code.is_user_facing() {
            error.message.clone()
        } else {
            tracing::error!(code = %error.code, error = %error, "Request failed");
            "Something went wrong".to_string()
        };

        let body = json!({
            "error": message,
            "code": error.code.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
