//! Static host for the built client bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Trunk output directory and answers every unknown path with
//! `index.html`, so deep links such as `/profile` or `/login?from=...` reach
//! the client router. The auth API itself is a separate service.

mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal in deployed environments.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env().and_then(|c| c.validate_site().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(port = config.port, site_root = %config.site_root.display(), "site host listening");
    if let Err(e) = axum::serve(listener, routes::app(&config)).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
