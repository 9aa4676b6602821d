use std::sync::Arc;

use crate::config::AppConfig;
use crate::generator::Generator;
use crate::llm::{GeminiClient, GenerationProvider};

pub struct AppState {
    pub config: AppConfig,
    pub generator: Generator,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let provider = Arc::new(GeminiClient::from_config(&config.llm));
        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: AppConfig, provider: Arc<dyn GenerationProvider>) -> Self {
        let generator = Generator::new(provider, config.llm.api_key.clone());
        Self { config, generator }
    }
}
