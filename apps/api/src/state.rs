use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::editor::session::EditorSession;
use crate::export::PrintFacility;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single editing session. Requests take the lock for the duration
    /// of one edit, so edits apply one at a time in arrival order.
    pub session: Arc<Mutex<EditorSession>>,
    /// Pluggable print backend. Default: HtmlFileExporter.
    pub printer: Arc<dyn PrintFacility>,
}
