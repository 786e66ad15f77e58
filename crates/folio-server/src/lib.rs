//! HTTP server for the Folio portfolio engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - API endpoints for project pages, project navigation, and theme tokens
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8080,
//!         content_dir: PathBuf::from("content"),
//!         slugs: vec!["pamela-chess-engine".to_string()],
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (folio-server)
//!                        │
//!                        └─► API routes (Rust handlers)
//!                                │
//!                                └─► Direct call ──► ProjectLoader ──► Storage
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use folio_config::ThemeConfig;
use folio_site::ProjectLoader;
use folio_storage::FsStorage;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content source directory holding one `<slug>.md` per project.
    pub content_dir: PathBuf,
    /// Project slug allow-list.
    pub slugs: Vec<String>,
    /// Theme token document served at `/api/theme`.
    pub theme: ThemeConfig,
    /// Application version (for `ETag` computation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            content_dir: PathBuf::from("content"),
            slugs: Vec::new(),
            theme: ThemeConfig::default(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create shared storage backend
    let storage: Arc<dyn folio_storage::Storage> =
        Arc::new(FsStorage::new(config.content_dir.clone()));

    // Create the allow-list gated page loader
    let loader = ProjectLoader::new(storage, config.slugs.clone());

    // Create app state
    let state = Arc::new(AppState {
        loader,
        theme: config.theme.clone(),
        version: config.version.clone(),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Folio config.
///
/// # Arguments
///
/// * `config` - Folio configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &folio_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.content_resolved.source_dir.clone(),
        slugs: config.projects.slugs.clone(),
        theme: config.theme.clone(),
        version,
    }
}
