//! Fragment endpoints for the browser editor.
//!
//! Each endpoint formats one piece of content and returns it as `{"rst": ...}`.
//! `/generate-rst` joins the editor's lines into a downloadable document.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use rstgen_directives::{FieldMap, format};
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::RstResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub(crate) struct TitleRequest {
    title: String,
}

#[derive(Deserialize)]
pub(crate) struct ContentRequest {
    content: String,
}

#[derive(Deserialize)]
pub(crate) struct ReferenceRequest {
    ref_name: String,
    ref_link: String,
}

#[derive(Deserialize)]
pub(crate) struct GenerateRequest {
    content_list: Vec<String>,
}

/// Handle POST /add-title.
pub(crate) async fn add_title(
    Json(request): Json<TitleRequest>,
) -> Result<Json<RstResponse>, ServerError> {
    let fields = FieldMap::new().with("text", request.title);
    Ok(Json(format("title", &fields)?.into()))
}

/// Handle POST /add-content.
pub(crate) async fn add_content(
    Json(request): Json<ContentRequest>,
) -> Result<Json<RstResponse>, ServerError> {
    let fields = FieldMap::new().with("text", request.content);
    Ok(Json(format("paragraph", &fields)?.into()))
}

/// Handle POST /add-reference.
pub(crate) async fn add_reference(
    Json(request): Json<ReferenceRequest>,
) -> Result<Json<RstResponse>, ServerError> {
    let fields = FieldMap::new()
        .with("name", request.ref_name)
        .with("link", request.ref_link);
    Ok(Json(format("reference", &fields)?.into()))
}

/// Handle POST /generate-rst.
pub(crate) async fn generate_rst(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.export_filename.replace('"', "")
    );
    tracing::debug!(lines = request.content_list.len(), "Generating document");

    (
        [
            (header::CONTENT_TYPE, "text/x-rst; charset=utf-8".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        request.content_list.join("\n"),
    )
}
