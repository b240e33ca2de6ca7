//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/healthz` for probes; everything else is the client bundle. Unknown paths
//! fall back to `index.html` with a 200 so the client router can render its
//! own not-found page.


use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    let spa = ServeDir::new(&config.site_root).fallback(ServeFile::new(config.index_path()));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(spa)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
