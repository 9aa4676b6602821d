use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use log::{debug, info};
use serde::Deserialize;
use std::sync::Arc;

use crate::component::{GeneratedComponent, GenerationError};
use crate::render::html_renderers::{render_page, PageView, EXPORT_FILENAME};
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub prompt: String,
}

pub fn configure() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handle_index_page))
        .route("/generate", post(handle_generate_form))
        .route(
            "/api/component",
            get(handle_get_component).post(handle_generate_component),
        )
        .route("/api/component/export", get(handle_export_component))
}

pub async fn handle_index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let generator = &state.generator;
    let view = PageView {
        busy: generator.is_busy(),
        ..PageView::default()
    };
    Html(render_page(&generator.preview().snapshot(), &view))
}

/// Form submit from the page. Always answers with the full page: the new
/// component on success, the banner over the previous one on failure.
pub async fn handle_generate_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let generator = &state.generator;
    let outcome = generator.generate(&form.prompt).await;

    let banner = outcome.as_ref().err().map(GenerationError::banner);
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => e.status_code(),
    };
    let view = PageView {
        prompt: &form.prompt,
        error: banner.as_deref(),
        busy: generator.is_busy(),
    };

    (status, Html(render_page(&generator.preview().snapshot(), &view))).into_response()
}

pub async fn handle_generate_component(
    State(state): State<Arc<AppState>>,
    Json(form): Json<GenerateForm>,
) -> Result<Json<GeneratedComponent>, GenerationError> {
    let mounted = state.generator.generate(&form.prompt).await?;
    Ok(Json(mounted.component.clone()))
}

pub async fn handle_get_component(State(state): State<Arc<AppState>>) -> Json<GeneratedComponent> {
    Json(state.generator.preview().current().component.clone())
}

pub async fn handle_export_component(State(state): State<Arc<AppState>>) -> Response {
    let mounted = state.generator.preview().current();
    if mounted.is_empty() {
        debug!("Export requested with nothing generated yet");
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "No component has been generated yet" })),
        )
            .into_response();
    }

    info!("Exporting component '{}'", mounted.component.name);
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        mounted.component.export_text(),
    )
        .into_response()
}
