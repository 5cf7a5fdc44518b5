mod config;
mod editor;
mod errors;
mod export;
mod models;
mod render;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::editor::session::EditorSession;
use crate::export::HtmlFileExporter;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Open the local store and restore the last snapshot (or sample content)
    let store = Arc::new(FileStore::new(&config.data_dir));
    info!("Document store at {}", store.root().display());
    let session = EditorSession::open(store, config.storage_key.clone());

    let printer = Arc::new(HtmlFileExporter::new(&config.export_dir));
    info!("Exports go to {}", config.export_dir.display());

    let state = AppState {
        config: config.clone(),
        session: Arc::new(Mutex::new(session)),
        printer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
