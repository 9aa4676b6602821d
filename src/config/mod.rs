use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LLM_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

// Keeps the key out of logs and panics.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_str = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get_str("GEMINI_API_KEY").or_else(|| get_str("VITE_GEMINI_API_KEY"));

        let base_url = {
            let url = get_str("NEUROUI_LLM_URL").unwrap_or_else(|| DEFAULT_LLM_URL.to_string());
            if !url.starts_with("http://") && !url.starts_with("https://") {
                format!("https://{}", url)
            } else {
                url
            }
        };

        AppConfig {
            server: ServerConfig {
                host: get_str("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: get_str("SERVER_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            llm: LlmConfig {
                api_key,
                model: get_str("NEUROUI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url,
                timeout: Duration::from_secs(
                    get_str("NEUROUI_LLM_TIMEOUT_SECS")
                        .and_then(|t| t.parse().ok())
                        .filter(|t| *t > 0)
                        .unwrap_or(DEFAULT_LLM_TIMEOUT_SECS),
                ),
            },
        }
    }
}
