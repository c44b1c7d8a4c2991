//! Error Conversion
//!
//! `IntoResponse` for backend errors, so handlers can return
//! `Result<Json<T>, BackendError>` directly. The response body is the flat
//! `{"error": "..."}` shape the frontend expects.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
