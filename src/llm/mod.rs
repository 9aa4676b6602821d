use async_trait::async_trait;

use crate::component::GenerationError;

pub mod gemini;
pub mod request;
pub mod types;

pub use gemini::GeminiClient;
pub use request::{prepare, PreparedRequest};
pub use types::RawReply;

/// Transport to a text-generation endpoint. Implementations issue exactly one
/// call per invocation and leave status handling to the interpreter.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, request: &PreparedRequest<'_>) -> Result<RawReply, GenerationError>;

    fn model(&self) -> &str;
}
