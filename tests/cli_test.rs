#[cfg(test)]
mod cli_integration_tests {
    use mockito::Matcher;
    use neuroui::cli::{parse_generate_args, run_generate};
    use neuroui::generator::Generator;
    use neuroui::llm::GeminiClient;
    use neuroui::tests::test_util::{component_json, gemini_reply_body, setup};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_generate_writes_export_file() {
        setup();
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(gemini_reply_body(&component_json(
                "GlowButton",
                "<button class='glow-btn'>Glow</button>",
                ".glow-btn{box-shadow:0 0 12px #764ba2}",
            )))
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("source_code.txt");
        let args: Vec<String> = ["purple", "glow", "button", "--out"]
            .iter()
            .map(|s| s.to_string())
            .chain(std::iter::once(out.display().to_string()))
            .collect();
        let args = parse_generate_args(&args).unwrap();

        let client = GeminiClient::new(&server.url(), "gemini-test", Duration::from_secs(5));
        let generator = Generator::new(Arc::new(client), Some("test-key".to_string()));
        let written = run_generate(&generator, &args).await.unwrap();

        let on_disk = std::fs::read_to_string(&out).unwrap();
        assert_eq!(on_disk, written);
        assert_eq!(
            on_disk,
            "\n<button class='glow-btn'>Glow</button>\n\n/* CSS */\n.glow-btn{box-shadow:0 0 12px #764ba2}"
        );
    }

    #[tokio::test]
    async fn test_generate_reports_banner_on_failure() {
        setup();
        let generator = Generator::new(
            Arc::new(GeminiClient::new("http://127.0.0.1:1", "gemini-test", Duration::from_secs(5))),
            None,
        );
        let args = parse_generate_args(&["card".to_string()]).unwrap();
        let err = run_generate(&generator, &args).await.unwrap_err();
        assert!(err.to_string().starts_with("API key not found"));
    }
}
