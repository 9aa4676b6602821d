//! HTML rendering functions for the generator page
use super::{MountedPreview, PreviewSnapshot};

pub const EMPTY_PREVIEW_MESSAGE: &str =
    "Generate a component above to see the live preview here.";
pub const PROMPT_PLACEHOLDER: &str =
    "Describe your component idea... (e.g., 'A sleek pricing card with gradient borders and hover glow')";
pub const EXPORT_FILENAME: &str = "source_code.txt";

/// Per-request page state that is not part of the preview itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageView<'a> {
    pub prompt: &'a str,
    pub error: Option<&'a str>,
    pub busy: bool,
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub fn render_page(snapshot: &PreviewSnapshot, view: &PageView<'_>) -> String {
    let has_content = !snapshot.mounted.is_empty();
    let body_class = if has_content { "content-active" } else { "" };
    let wrapper_class = if has_content {
        "preview-wrapper card active"
    } else {
        "preview-wrapper card"
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>NeuroUI</title>
    <link rel="stylesheet" href="/static/app.css">
    {style}
</head>
<body class="{body_class}">
    <div class="app">
        <div class="app-header">
            <h1>NeuroUI</h1>
            <p class="header-sub">Describe your component, see it, copy it, export it.</p>
            {form}
        </div>
        {banner}
        <div class="{wrapper_class}" id="preview">
            {preview}
        </div>
    </div>
    <script src="/static/app.js"></script>
</body>
</html>"#,
        style = snapshot.style.render(),
        body_class = body_class,
        form = render_prompt_form(view.prompt, view.busy),
        banner = render_error_banner(view.error),
        wrapper_class = wrapper_class,
        preview = render_preview(&snapshot.mounted),
    )
}

pub fn render_prompt_form(prompt: &str, busy: bool) -> String {
    let (disabled, button_class, label) = if busy {
        (" disabled", "prompt-btn loading", "Generating...")
    } else {
        ("", "prompt-btn", "Generate Component")
    };

    format!(
        r#"<form class="prompt-form card" method="post" action="/generate">
                <textarea name="prompt" rows="4" class="prompt-textarea" placeholder="{placeholder}"{disabled}>{prompt}</textarea>
                <div class="prompt-btn-wrap">
                    <button type="submit" class="{button_class}"{disabled}>{label}</button>
                </div>
            </form>"#,
        placeholder = escape_html(PROMPT_PLACEHOLDER),
        disabled = disabled,
        prompt = escape_html(prompt),
        button_class = button_class,
        label = label,
    )
}

pub fn render_error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) if !message.is_empty() => format!(
            r#"<div class="error-banner" role="alert">{}</div>"#,
            escape_html(message)
        ),
        _ => String::new(),
    }
}

/// Preview region: the placeholder when nothing is mounted, otherwise the
/// sanitized markup plus the raw-source code panel.
pub fn render_preview(mounted: &MountedPreview) -> String {
    if mounted.is_empty() {
        return format!(r#"<div class="preview-empty">{}</div>"#, EMPTY_PREVIEW_MESSAGE);
    }

    let component = &mounted.component;
    format!(
        r#"<div class="preview-header"><h2 class="preview-title">{name}</h2></div>
            <div class="preview-surface">
                <div>{markup}</div>
            </div>
            {code}"#,
        name = escape_html(&component.name),
        markup = mounted.safe_markup,
        code = render_code_panel(mounted),
    )
}

/// The parser drops one newline right after `<textarea>`, so the export text
/// gets a leading one to keep the copied value byte-identical.
pub fn render_code_panel(mounted: &MountedPreview) -> String {
    let component = &mounted.component;
    format!(
        r#"<div class="preview-code active">
                <div class="code-actions">
                    <button type="button" class="action-btn" data-copy-source="export-source">Copy Code</button>
                    <a class="action-btn" href="/api/component/export" download="{filename}">Export Files</a>
                </div>
                <textarea id="export-source" hidden readonly>
{export}</textarea>
                <details>
                    <summary>HTML Code</summary>
                    <pre><code>{markup}</code></pre>
                </details>
                <details>
                    <summary>CSS Code</summary>
                    <pre><code>{stylesheet}</code></pre>
                </details>
            </div>"#,
        filename = EXPORT_FILENAME,
        export = escape_html(&component.export_text()),
        markup = escape_html(&component.markup),
        stylesheet = escape_html(&component.stylesheet),
    )
}
