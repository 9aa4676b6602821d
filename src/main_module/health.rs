//! Health check handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::shared::state::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    let generator = &state.generator;
    let credential_ok = generator.has_credential();

    // A missing key is recoverable per request, so the process still reports 200.
    let status = if credential_ok { "healthy" } else { "degraded" };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": status,
            "service": "neuroui",
            "version": env!("CARGO_PKG_VERSION"),
            "model": generator.model(),
            "credential": credential_ok,
            "busy": generator.is_busy()
        })),
    )
}
