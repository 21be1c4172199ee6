//! HTTP backend for rstgen.
//!
//! Serves the endpoints the browser editor calls to turn form values into
//! reStructuredText, plus a JSON API for other clients:
//!
//! | route | body | response |
//! |---|---|---|
//! | `POST /add-title` | `{title}` | `{rst}` |
//! | `POST /add-content` | `{content}` | `{rst}` |
//! | `POST /add-reference` | `{ref_name, ref_link}` | `{rst}` |
//! | `POST /generate-rst` | `{content_list}` | `text/x-rst` attachment |
//! | `POST /api/format` | `{kind, fields}` | `{rst}` |
//! | `POST /api/insert` | `{buffer, selection_start, selection_end, fragment}` | `{buffer, caret}` |
//!
//! The server keeps no per-user state; the document lives in the client.
//!
//! # Quick Start
//!
//! ```no_run
//! use rstgen_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         port: 8080,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// File name offered for the generated document download.
    pub export_filename: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            export_filename: "generated_document.rst".to_owned(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        export_filename: config.export_filename,
    });
    let app = app::create_router(state);

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

/// Create server configuration from rstgen config.
#[must_use]
pub fn server_config_from_config(config: &rstgen_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        export_filename: config.export.filename.clone(),
    }
}
