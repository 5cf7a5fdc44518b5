pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route(
            "/api/v1/document",
            get(editor::handle_get_document).patch(editor::handle_apply_edit),
        )
        .route("/api/v1/preview", get(render::handle_preview))
        .route("/api/v1/export", post(export::handle_export))
        .with_state(state)
}
