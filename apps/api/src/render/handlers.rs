use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::PresentationMode;
use crate::render::{render, render_with};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Layout to preview instead of the selected one.
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        PresentationMode::ALL
            .into_iter()
            .map(|mode| TemplateInfo {
                id: mode.id(),
                name: mode.display_name(),
                description: mode.description(),
            })
            .collect(),
    )
}

/// GET /api/v1/preview
///
/// Full printable page of the current snapshot. `?template=<id>` previews
/// another layout without changing the stored selection.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let mode = match query.template.as_deref() {
        Some(id) => Some(
            PresentationMode::from_id(id)
                .ok_or_else(|| AppError::Validation(format!("Unknown template '{id}'")))?,
        ),
        None => None,
    };

    let doc = state.session.lock().await.snapshot();
    let rendered = match mode {
        Some(mode) => render_with(&doc, mode),
        None => render(&doc),
    };
    Ok(Html(rendered.to_page()))
}
