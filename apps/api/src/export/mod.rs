//! Export: hands the rendered document to a print facility.
//!
//! `AppState` holds an `Arc<dyn PrintFacility>`. The default backend writes
//! a printable HTML page to the export directory; the browser's print
//! dialog (or any HTML-to-PDF tool) takes it from there.

pub mod handlers;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::render::RenderedDocument;

const TITLE_SUFFIX: &str = "_Resume";

/// Builds the suggested output title: every whitespace run in `name`
/// becomes a single `_`, followed by `_Resume`.
pub fn export_title(name: &str) -> String {
    let mut title = String::with_capacity(name.len() + TITLE_SUFFIX.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                title.push('_');
            }
            in_whitespace = true;
        } else {
            title.push(c);
            in_whitespace = false;
        }
    }
    title.push_str(TITLE_SUFFIX);
    title
}

/// What the print facility receives.
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub title: String,
    pub rendered: RenderedDocument,
}

impl PrintJob {
    pub fn new(rendered: RenderedDocument) -> Self {
        PrintJob {
            title: rendered.title.clone(),
            rendered,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrintReceipt {
    pub title: String,
    pub location: String,
    pub bytes: usize,
}

#[async_trait]
pub trait PrintFacility: Send + Sync {
    async fn print(&self, job: PrintJob) -> Result<PrintReceipt, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HtmlFileExporter
// ────────────────────────────────────────────────────────────────────────────

/// Writes `<dir>/<title>.html`. Characters outside `[A-Za-z0-9_-]` in the
/// title are replaced with `_` in the file name only.
pub struct HtmlFileExporter {
    dir: PathBuf,
}

impl HtmlFileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        HtmlFileExporter { dir: dir.into() }
    }
}

#[async_trait]
impl PrintFacility for HtmlFileExporter {
    async fn print(&self, job: PrintJob) -> Result<PrintReceipt, AppError> {
        let page = job.rendered.to_page();
        let path = self.dir.join(format!("{}.html", file_stem(&job.title)));

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Export(format!(
                "cannot create export directory {}: {e}",
                self.dir.display()
            ))
        })?;
        tokio::fs::write(&path, page.as_bytes())
            .await
            .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))?;

        info!("Exported '{}' to {}", job.title, path.display());
        Ok(PrintReceipt {
            title: job.title,
            location: path.display().to_string(),
            bytes: page.len(),
        })
    }
}

fn file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "resume".to_string()
    } else {
        stem
    }
}
