use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare `cargo run` works locally.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the key-value store files.
    pub data_dir: PathBuf,
    /// Directory the HTML exporter writes to.
    pub export_dir: PathBuf,
    /// Key the document snapshot is stored under.
    pub storage_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: env_or("DATA_DIR", "./data").into(),
            export_dir: env_or("EXPORT_DIR", "./exports").into(),
            storage_key: env_or("STORAGE_KEY", "resumeData"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
