use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Every way a single generation attempt can fail. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("API key not found. Add GEMINI_API_KEY to your .env file.")]
    MissingCredential,
    #[error("Please enter a component description first.")]
    EmptyInput,
    #[error("A component is already being generated. Please wait for it to finish.")]
    Busy,
    #[error("Gemini API error {}: {message}", status_label(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },
    #[error("Empty or malformed AI response.")]
    EmptyResponse,
    #[error("Gemini returned non-JSON text. Please re-generate.")]
    NonJsonResponse,
    #[error("Gemini returned invalid JSON: {0}")]
    MalformedJson(String),
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "(no response)".to_string(),
    }
}

impl GenerationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::EmptyInput => "empty_input",
            Self::Busy => "busy",
            Self::Transport { .. } => "transport_error",
            Self::EmptyResponse => "empty_response",
            Self::NonJsonResponse => "non_json_response",
            Self::MalformedJson(_) => "malformed_json",
        }
    }

    /// The single line shown in the error banner.
    pub fn banner(&self) -> String {
        match self {
            Self::MissingCredential | Self::EmptyInput | Self::Busy => self.to_string(),
            _ => format!("Failed to generate component: {}", self),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyInput => StatusCode::BAD_REQUEST,
            Self::Busy => StatusCode::CONFLICT,
            Self::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
            Self::Transport { .. }
            | Self::EmptyResponse
            | Self::NonJsonResponse
            | Self::MalformedJson(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({
                "error": self.banner(),
                "kind": self.kind(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = GenerationError::Transport {
            status: Some(403),
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error 403: API key not valid");
        assert_eq!(
            err.banner(),
            "Failed to generate component: Gemini API error 403: API key not valid"
        );

        let timeout = GenerationError::Transport {
            status: None,
            message: "operation timed out".to_string(),
        };
        assert!(timeout.to_string().contains("(no response)"));
    }

    #[test]
    fn test_precondition_banners_are_verbatim() {
        assert_eq!(
            GenerationError::EmptyInput.banner(),
            "Please enter a component description first."
        );
        assert!(GenerationError::MissingCredential
            .banner()
            .starts_with("API key not found"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(GenerationError::EmptyInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GenerationError::Busy.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            GenerationError::MissingCredential.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(GenerationError::NonJsonResponse.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(GenerationError::NonJsonResponse.kind(), "non_json_response");
    }
}
