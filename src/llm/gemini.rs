use async_trait::async_trait;
use log::{error, info};
use std::time::Duration;

use super::{GenerationProvider, PreparedRequest, RawReply};
use crate::component::GenerationError;
use crate::config::LlmConfig;

// Gemini generateContent client.
// Full URL: {base_url}/models/{model}:generateContent?key={api_key}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(&config.base_url, &config.model, config.timeout)
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(&self, request: &PreparedRequest<'_>) -> Result<RawReply, GenerationError> {
        let url = self.build_url();
        info!("Gemini request to: {}?key=<redacted>", url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", request.api_key)])
            .json(&request.body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Gemini request failed: {}", e);
                GenerationError::Transport {
                    status: e.status().map(|s| s.as_u16()),
                    message: e.to_string(),
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            error!("Failed to read Gemini response body: {}", e);
            GenerationError::Transport {
                status: Some(status),
                message: e.to_string(),
            }
        })?;

        info!("Gemini responded {} ({} bytes)", status, body.len());
        Ok(RawReply::new(status, body))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-2.5-flash",
            Duration::from_secs(5),
        );
        assert_eq!(
            client.build_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(client.model(), "gemini-2.5-flash");
    }
}
