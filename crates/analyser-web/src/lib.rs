//! Speed Analyser Web Server
//!
//! Axum-based HTTP server exposing the analysis REST API.

pub mod cors;
pub mod routes;

use analyser_core::config::ServerConfig;
use analyser_core::AnalyserResult;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// Fails only on invalid CORS configuration; the routes themselves carry no
/// state and cannot fail to build.
pub fn create_router(config: &ServerConfig) -> AnalyserResult<Router> {
    let cors = cors::cors_layer(&config.cors)?;

    Ok(Router::new()
        .route("/", get(routes::health::root))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Run the web server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    if config.cors.allows_any_origin() && config.cors.allow_credentials {
        tracing::warn!(
            "CORS allows any origin with credentials; tighten [cors] allow_origins for production"
        );
    }

    let app = create_router(&config)?;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    tracing::info!(
        "Analyser server listening on http://{}:{}",
        config.host,
        config.port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
