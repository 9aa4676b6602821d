#[cfg(test)]
mod web_server_integration_tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use mockito::Matcher;
    use neuroui::config::AppConfig;
    use neuroui::llm::GeminiClient;
    use neuroui::main_module::build_router;
    use neuroui::shared::state::AppState;
    use neuroui::tests::test_util::{component_json, gemini_reply_body, setup};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    const RED_BUTTON_EXPORT: &str = "\n<button>Go</button>\n\n/* CSS */\nbutton{color:red;}";

    fn app_for(base_url: &str, api_key: Option<&str>) -> Router {
        let config = AppConfig::from_lookup(|key| match key {
            "GEMINI_API_KEY" => api_key.map(String::from),
            "NEUROUI_MODEL" => Some("gemini-test".to_string()),
            _ => None,
        });
        let client = GeminiClient::new(base_url, &config.llm.model, Duration::from_secs(5));
        build_router(Arc::new(AppState::with_provider(config, Arc::new(client))))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<(String, String)>, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(prompt: &str) -> Request<Body> {
        let encoded: String = prompt.replace(' ', "+");
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("prompt={}", encoded)))
            .unwrap()
    }

    fn post_json(prompt: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/component")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::json!({ "prompt": prompt }).to_string()))
            .unwrap()
    }

    fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    async fn red_button_server() -> mockito::ServerGuard {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Regex("gemini-test:generateContent".to_string()))
            .match_query(Matcher::Any)
            .match_body(Matcher::Regex(r"User request:\\nred button".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(gemini_reply_body(&component_json(
                "RedBtn",
                "<button>Go</button>",
                "button{color:red;}",
            )))
            .create_async()
            .await;
        server
    }

    #[tokio::test]
    async fn test_index_shows_empty_state() {
        setup();
        let app = app_for("http://127.0.0.1:1", Some("test-key"));
        let (status, _, body) = send(&app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Generate a component above to see the live preview here."));
        assert!(body.contains(r#"<style id="custom-component-style"></style>"#));
        assert!(body.contains("Generate Component"));
    }

    #[tokio::test]
    async fn test_form_generate_then_export() {
        setup();
        let server = red_button_server().await;
        let app = app_for(&server.url(), Some("test-key"));

        let (status, _, page) = send(&app, post_form("red button")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("<div><button>Go</button></div>"));
        assert!(page.contains(r#"<style id="custom-component-style">button{color:red;}</style>"#));
        assert!(!page.contains("error-banner"));

        let (status, headers, body) = send(&app, get("/api/component/export")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, RED_BUTTON_EXPORT);
        assert!(header_value(&headers, "content-type")
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(
            header_value(&headers, "content-disposition"),
            Some("attachment; filename=\"source_code.txt\"")
        );

        let (_, _, json) = send(&app, get("/api/component")).await;
        let component: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(component["name"], "RedBtn");
        assert_eq!(component["stylesheet"], "button{color:red;}");
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_previous_component() {
        setup();
        let mut server = red_button_server().await;
        server
            .mock("POST", Matcher::Regex("gemini-test:generateContent".to_string()))
            .match_query(Matcher::Any)
            .match_body(Matcher::Regex(r"User request:\\nprose please".to_string()))
            .with_status(200)
            .with_body(gemini_reply_body("Here is a lovely component for you!"))
            .create_async()
            .await;
        let app = app_for(&server.url(), Some("test-key"));

        send(&app, post_form("red button")).await;
        let (status, _, page) = send(&app, post_form("prose please")).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(page.contains(
            "Failed to generate component: Gemini returned non-JSON text. Please re-generate."
        ));
        assert!(page.contains("<button>Go</button>"));
        assert!(page.contains("button{color:red;}"));
    }

    #[tokio::test]
    async fn test_api_blank_prompt_is_bad_request() {
        setup();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let app = app_for(&server.url(), Some("test-key"));

        let (status, _, body) = send(&app, post_json("   ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["kind"], "empty_input");
        assert_eq!(error["error"], "Please enter a component description first.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_missing_key_is_unavailable() {
        setup();
        let app = app_for("http://127.0.0.1:1", None);
        let (status, _, body) = send(&app, post_json("red button")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let error: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["kind"], "missing_credential");

        let (status, _, health) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let health: serde_json::Value = serde_json::from_str(&health).unwrap();
        assert_eq!(health["status"], "degraded");
        assert_eq!(health["credential"], false);
    }

    #[tokio::test]
    async fn test_api_generate_returns_component() {
        setup();
        let server = red_button_server().await;
        let app = app_for(&server.url(), Some("test-key"));

        let (status, _, body) = send(&app, post_json("red button")).await;
        assert_eq!(status, StatusCode::OK);
        let component: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(component["name"], "RedBtn");
        assert_eq!(component["markup"], "<button>Go</button>");
    }

    #[tokio::test]
    async fn test_export_before_generation_is_not_found() {
        setup();
        let app = app_for("http://127.0.0.1:1", Some("test-key"));
        let (status, _, _) = send(&app, get("/api/component/export")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_and_static_assets() {
        setup();
        let app = app_for("http://127.0.0.1:1", Some("test-key"));

        let (status, _, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["service"], "neuroui");
        assert_eq!(health["model"], "gemini-test");
        assert_eq!(health["busy"], false);

        let (status, headers, css) = send(&app, get("/static/app.css")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(header_value(&headers, "content-type").unwrap().starts_with("text/css"));
        assert!(css.contains(".preview-surface"));

        let (status, _, _) = send(&app, get("/static/missing.js")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
