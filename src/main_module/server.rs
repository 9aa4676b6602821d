//! HTTP server initialization and routing

use axum::{routing::get, Router};
use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::shared::state::AppState;

use super::{health_check, shutdown_signal};

pub fn build_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::web_server::configure());

    Router::new()
        .merge(api_router.with_state(app_state))
        .merge(crate::embedded_ui::embedded_ui_router())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_axum_server(app_state: Arc<AppState>) -> std::io::Result<()> {
    let server = &app_state.config.server;
    let addr: SocketAddr = format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| {
            error!("Invalid listen address {}:{}: {}", server.host, server.port, e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
        })?;

    if !app_state.generator.has_credential() {
        warn!("GEMINI_API_KEY is not set; generation requests will be rejected until it is");
    }
    info!(
        "Using model {} at {}",
        app_state.config.llm.model, app_state.config.llm.base_url
    );

    let app = build_router(Arc::clone(&app_state));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(
                "Failed to bind to {}: {} - is another instance running?",
                addr, e
            );
            return Err(e);
        }
    };
    info!("HTTP server listening on http://{}", addr);

    let result = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(std::io::Error::other);

    app_state.generator.preview().unmount();
    info!("Server stopped");
    result
}
