//! HTTP serving of matrix operations.
//!
//! Hosts the wire-compatible matrix API: POST /qr, POST /rotate, GET /health,
//! with a JSON 404 fallback. Successful QR results are forwarded to the
//! downstream statistics service on a detached task (see [`stats`]).

pub(crate) mod handlers;
pub(crate) mod routes;
pub(crate) mod stats;

use crate::error::{CliError, Result};
use colored::Colorize;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Host to bind to
    pub host: String,
    /// Attach permissive CORS headers
    pub cors: bool,
    /// Log each handled request
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            host: "127.0.0.1".to_string(),
            cors: true,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Create config with custom port (builder pattern, used in tests)
    #[cfg(test)]
    pub(crate) fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create config with custom host (builder pattern, used in tests)
    #[cfg(test)]
    pub(crate) fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Get bind address
    pub(crate) fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared request-handling state: immutable config plus the downstream
/// stats notifier. Cloned via Arc into every handler.
#[derive(Debug)]
pub(crate) struct AppState {
    pub config: ServerConfig,
    pub stats: stats::StatsNotifier,
}

pub(crate) type SharedState = Arc<AppState>;

/// Serve command entry point (blocking)
pub(crate) fn run(config: &ServerConfig) -> Result<()> {
    println!("{}", "=== Matriz Serve ===".cyan().bold());
    println!();
    println!("Binding: {}", config.bind_addr());
    println!();
    println!("{}", "Endpoints:".green().bold());
    println!("  POST /qr       - QR factorization");
    println!("  POST /rotate   - 90-degree matrix rotation");
    println!("  GET  /health   - Health check");
    println!();
    println!("{}", "Press Ctrl+C to stop".dimmed());

    let notifier = stats::StatsNotifier::from_env()
        .map_err(|e| CliError::ServerFailed(format!("Failed to build stats client: {e}")))?;

    if notifier.has_token() {
        println!("{}", "JWT token configured for node-api calls".dimmed());
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::ServerFailed(format!("Failed to create runtime: {e}")))?;

    let bind_addr = config.bind_addr();
    let state = Arc::new(AppState {
        config: config.clone(),
        stats: notifier,
    });

    runtime.block_on(async move {
        let app = routes::build_router(state);

        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| CliError::ServerFailed(format!("Failed to bind: {e}")))?;

        println!();
        println!(
            "{}",
            format!("Server ready on http://{bind_addr}").green().bold()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CliError::ServerFailed(format!("Server error: {e}")))?;

        println!();
        println!("{}", "Server stopped".yellow());
        Ok(())
    })
}

async fn shutdown_signal() {
    // Binding error aside, a failed signal hook just means no graceful stop.
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
