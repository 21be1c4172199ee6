//! JSON API for programmatic clients.

use axum::Json;
use rstgen_directives::DirectiveRequest;
use rstgen_editor::{Insertion, insert};
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::RstResponse;

/// Request for POST /api/insert. Offsets count characters.
#[derive(Deserialize)]
pub(crate) struct InsertRequest {
    buffer: String,
    selection_start: usize,
    selection_end: usize,
    fragment: String,
}

/// Handle POST /api/format.
///
/// Unknown kinds are formatted as generic directives; only missing or
/// malformed fields are rejected.
pub(crate) async fn format_fragment(
    Json(request): Json<DirectiveRequest>,
) -> Result<Json<RstResponse>, ServerError> {
    let rst = request.format().inspect_err(|e| {
        tracing::debug!(kind = %request.kind, error = %e, "Rejected format request");
    })?;
    Ok(Json(rst.into()))
}

/// Handle POST /api/insert.
pub(crate) async fn insert_fragment(
    Json(request): Json<InsertRequest>,
) -> Result<Json<Insertion>, ServerError> {
    let insertion = insert(
        &request.buffer,
        request.selection_start,
        request.selection_end,
        &request.fragment,
    )?;
    Ok(Json(insertion))
}
