/**
 * Error Conversion
 *
 * Handlers return `Result<_, BackendError>`; this renders the error half as
 * `{"error": "<message>", "status": <code>}`.
 */

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, "Request failed: {}", message);
        } else {
            tracing::warn!(%status, "Request rejected: {}", message);
        }

        (status, Json(json!({ "error": message, "status": status.as_u16() }))).into_response()
    }
}
