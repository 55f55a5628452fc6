// --- File: crates/dustout_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{DustoutError, HttpStatusCode};

/// Extension trait for DustoutError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for DustoutError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Clients only ever see a flattened { "error": string } shape.
        let body = Json(json!({ "error": self.to_string() }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for DustoutError to make it easier to use in Axum handlers.
impl IntoResponse for DustoutError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
