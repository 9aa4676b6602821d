//! Validates a raw model reply and extracts a complete `GeneratedComponent`
//!
//! Stages run in order and each one has its own failure kind:
//! status check, text extraction, fence stripping, structural pre-check,
//! JSON parse, field mapping with fallbacks.

use log::{debug, warn};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::{GeneratedComponent, GenerationError};
use crate::llm::types::{ApiErrorBody, GenerateContentResponse, RawReply};

pub const DEFAULT_NAME: &str = "Generated Component";
// Keeps a structurally valid but incomplete reply renderable. This treats
// "valid JSON without markup" as a success; revisit if that proves confusing.
pub const MISSING_MARKUP: &str = "<div>Error: No HTML generated.</div>";

const NAME_KEY: &str = "componentName";
const MARKUP_KEY: &str = "componentHtml";
const STYLESHEET_KEY: &str = "cssCode";

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```json").expect("Invalid json fence regex"));

pub fn interpret(reply: &RawReply) -> Result<GeneratedComponent, GenerationError> {
    check_status(reply)?;
    let text = extract_text(&reply.body)?;
    let cleaned = strip_code_fences(&text);
    precheck(&cleaned)?;
    let fields = parse_object(&cleaned)?;
    Ok(map_fields(&fields))
}

pub fn check_status(reply: &RawReply) -> Result<(), GenerationError> {
    if reply.is_success() {
        return Ok(());
    }

    let message = serde_json::from_str::<ApiErrorBody>(&reply.body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Invalid request".to_string());

    warn!("Generation endpoint returned {}: {}", reply.status, message);
    Err(GenerationError::Transport {
        status: Some(reply.status),
        message,
    })
}

pub fn extract_text(body: &str) -> Result<String, GenerationError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|_| GenerationError::EmptyResponse)?;

    match response.first_text() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(GenerationError::EmptyResponse),
    }
}

/// Removes a leading ```json marker and every remaining ``` marker, then trims.
/// Applying it twice gives the same result as applying it once.
pub fn strip_code_fences(text: &str) -> String {
    let without_json_fence = JSON_FENCE.replace(text, "");
    without_json_fence.replace("```", "").trim().to_string()
}

/// Cheap structural guard so prose replies never reach the JSON parser.
pub fn precheck(cleaned: &str) -> Result<(), GenerationError> {
    if cleaned.starts_with('{') && cleaned.contains(MARKUP_KEY) {
        Ok(())
    } else {
        debug!(
            "Reply failed structural pre-check: {:?}",
            cleaned.chars().take(80).collect::<String>()
        );
        Err(GenerationError::NonJsonResponse)
    }
}

pub fn parse_object(cleaned: &str) -> Result<Map<String, Value>, GenerationError> {
    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(GenerationError::MalformedJson(format!(
            "expected an object, found {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(GenerationError::MalformedJson(e.to_string())),
    }
}

pub fn map_fields(fields: &Map<String, Value>) -> GeneratedComponent {
    let text = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };

    GeneratedComponent::new(
        text(NAME_KEY).unwrap_or(DEFAULT_NAME),
        text(MARKUP_KEY).unwrap_or(MISSING_MARKUP),
        text(STYLESHEET_KEY).unwrap_or(""),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
