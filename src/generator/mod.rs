//! The generate-and-render pipeline
//!
//! prepare request -> one provider call -> interpret reply -> mount preview.
//! Any failure short-circuits before mount, so the previous component stays.

use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::component::{interpret, GenerationError};
use crate::llm::{prepare, GenerationProvider};
use crate::render::{MountedPreview, Preview};

pub struct Generator {
    provider: Arc<dyn GenerationProvider>,
    api_key: Option<String>,
    busy: AtomicBool,
    preview: Preview,
}

impl Generator {
    pub fn new(provider: Arc<dyn GenerationProvider>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key,
            busy: AtomicBool::new(false),
            preview: Preview::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub async fn generate(&self, prompt: &str) -> Result<Arc<MountedPreview>, GenerationError> {
        let request = prepare(prompt, self.api_key.as_deref())?;

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            info!("Rejected generation request: another one is in flight");
            return Err(GenerationError::Busy);
        }
        let _busy = scopeguard::guard(&self.busy, |busy| busy.store(false, Ordering::Release));

        info!(
            "Generating component with {} ({} chars of prompt)",
            self.provider.model(),
            prompt.trim().len()
        );

        let result = match self.provider.generate(&request).await {
            Ok(reply) => interpret(&reply),
            Err(e) => Err(e),
        };

        match result {
            Ok(component) => Ok(self.preview.mount(component)),
            Err(e) => {
                error!("Component generation failed ({}): {}", e.kind(), e);
                Err(e)
            }
        }
    }
}
