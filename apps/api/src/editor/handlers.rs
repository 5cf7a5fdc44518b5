//! Axum route handlers for the Document API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::editor::edits::Edit;
use crate::editor::session::SaveStatus;
use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: Arc<ResumeDocument>,
    pub save: SaveStatus,
}

/// GET /api/v1/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<DocumentResponse> {
    let session = state.session.lock().await;
    Json(DocumentResponse {
        document: session.snapshot(),
        save: session.save_status().clone(),
    })
}

/// PATCH /api/v1/document
///
/// Applies one edit and persists the new snapshot. A body that does not
/// parse as an [`Edit`] (unknown `op`, unknown template id, missing field)
/// is a 400 `VALIDATION_ERROR`. Otherwise always succeeds; a failed write
/// shows up in `save.last_error`.
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    payload: Result<Json<Edit>, JsonRejection>,
) -> Result<Json<DocumentResponse>, AppError> {
    let Json(edit) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut session = state.session.lock().await;
    let document = session.apply(&edit).await;
    let save = session.save_status().clone();
    if save.last_error.is_some() {
        info!("Edit '{}' kept in memory only", edit.op());
    }
    Ok(Json(DocumentResponse { document, save }))
}
