//! Turns a user prompt into a fully-specified generation request

use super::types::{Content, GenerateContentRequest};
use crate::component::GenerationError;

pub const SYSTEM_PROMPT: &str = r#"
You are an expert front-end developer specializing in modern CSS.

Reply ONLY with a single JSON object exactly following this schema:
{
  "componentName": "string",
  "componentHtml": "string",
  "cssCode": "string"
}

CRITICAL RULES:
- Return ONLY the JSON object with NO markdown fences, explanations, or backticks
- componentHtml MUST contain semantic HTML with class names
- cssCode MUST contain complete, modern CSS that fully styles the HTML
- Implement EVERY design detail requested: colors, shadows, borders, effects, animations, hover states, etc.
- Use modern CSS features: flexbox, grid, backdrop-filter, gradients, transforms, transitions, etc.
- NEVER return unstyled HTML or placeholder CSS
- NEVER include <script> elements or inline event handlers
- Add hover states and transitions for interactive elements
- Use responsive units (%, rem, em) not fixed large px values
- Add overflow: auto to scrollable content sections
- Limit component height to max 600px or add overflow-y: auto
- Wrap root element in a container div with consistent padding
- For tables: wrap in a div with overflow-x: auto; max-width: 100%;
- Prefer layouts that wrap vertically over horizontal-only scrolling
- Add box-sizing: border-box; to root element
- Add subtle hover effects on interactive rows/items for better UX
- Wrap root element with: padding: 2rem; box-sizing: border-box; width: 100%;
- Design components at professional desktop sizes
- For pricing cards or card grids: each card should be minimum 280px wide
- Let the grid overflow naturally if cards don't fit, container will scroll

EXAMPLE - User: "red button with shadow and rounded corners"
{
  "componentName": "RedShadowButton",
  "componentHtml": "<button class='red-btn'>Click Me</button>",
  "cssCode": ".red-btn { background: #ef4444; color: white; padding: 12px 24px; border: none; border-radius: 12px; box-shadow: 0 4px 12px rgba(239, 68, 68, 0.4); font-weight: 600; cursor: pointer; transition: all 0.3s; } .red-btn:hover { background: #dc2626; transform: translateY(-2px); }"
}

EXAMPLE - User: "glass card with blur background"
{
  "componentName": "GlassCard",
  "componentHtml": "<div class='glass-card'><h2 class='glass-title'>Title</h2><p class='glass-text'>Content goes here</p></div>",
  "cssCode": ".glass-card { background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(10px); border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 16px; padding: 24px; } .glass-title { margin: 0 0 12px 0; font-size: 24px; color: #1f2937; } .glass-text { margin: 0; color: #4b5563; line-height: 1.6; }"
}

Now generate the component based on the user's request. Include ALL requested styling details in the cssCode.
"#;

const CLOSING_REMINDER: &str = "IMPORTANT: Return fully styled HTML and CSS.";

/// A validated request, ready for exactly one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest<'a> {
    pub api_key: &'a str,
    pub body: GenerateContentRequest,
}

/// Checks the credential, then the prompt, and builds the request body.
/// Nothing here touches the network.
pub fn prepare<'a>(
    prompt: &str,
    api_key: Option<&'a str>,
) -> Result<PreparedRequest<'a>, GenerationError> {
    let api_key = api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(GenerationError::MissingCredential)?;

    if prompt.trim().is_empty() {
        return Err(GenerationError::EmptyInput);
    }

    Ok(PreparedRequest {
        api_key,
        body: build_request(prompt),
    })
}

pub fn build_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(build_prompt_text(prompt))],
    }
}

/// Instruction prelude followed by the user's text, verbatim.
pub fn build_prompt_text(prompt: &str) -> String {
    format!(
        "{}\n\nUser request:\n{}\n\n{}",
        SYSTEM_PROMPT, prompt, CLOSING_REMINDER
    )
}
