use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::export::{PrintJob, PrintReceipt};
use crate::render::render;
use crate::state::AppState;

/// POST /api/v1/export
///
/// Renders the current snapshot and hands it to the configured print
/// facility together with the derived title.
pub async fn handle_export(State(state): State<AppState>) -> Result<Json<PrintReceipt>, AppError> {
    let doc = state.session.lock().await.snapshot();
    let job = PrintJob::new(render(&doc));
    let sections: Vec<&str> = job.rendered.sections.iter().map(|s| s.as_str()).collect();
    info!(
        "Exporting '{}' with layout '{}', sections [{}]",
        job.title,
        job.rendered.mode.id(),
        sections.join(", ")
    );
    let receipt = state.printer.print(job).await?;
    Ok(Json(receipt))
}
