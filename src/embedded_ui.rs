use axum::{
    body::Body,
    extract::Path,
    http::{header, Response, StatusCode},
    routing::get,
    Router,
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "ui/"]
#[prefix = ""]
struct EmbeddedUi;

async fn serve_embedded_file(Path(path): Path<String>) -> Response<Body> {
    let path = path.trim_start_matches('/');

    match EmbeddedUi::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            let mut response = Response::new(Body::from(content.data.into_owned()));
            let headers = response.headers_mut();
            if let Ok(value) = mime.essence_str().parse() {
                headers.insert(header::CONTENT_TYPE, value);
            }
            headers.insert(
                header::CACHE_CONTROL,
                header::HeaderValue::from_static("public, max-age=3600"),
            );
            response
        }
        None => {
            let mut response = Response::new(Body::from("Not Found"));
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}

pub fn embedded_ui_router() -> Router {
    Router::new().route("/static/{*path}", get(serve_embedded_file))
}

pub fn list_embedded_files() -> Vec<String> {
    EmbeddedUi::iter().map(|f| f.to_string()).collect()
}
