//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rstgen_directives::FormatError;
use rstgen_editor::SelectionError;
use serde_json::json;

/// Request handling errors.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// The submitted fields do not produce a fragment.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// The submitted selection does not fit the buffer.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Format(e) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid fields", "detail": e.to_string()}),
            ),
            Self::Selection(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": "Invalid selection", "detail": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
