use regex::Regex;
use std::sync::LazyLock;

/// Stable key of the one style container holding the generated stylesheet.
pub const STYLE_SLOT_ID: &str = "custom-component-style";

static STYLE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</style").expect("Invalid style close regex"));

/// The single stylesheet container. Acquiring replaces its content,
/// releasing clears it; there is never a second container.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyleSlot {
    content: String,
}

impl StyleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, stylesheet: &str) {
        self.content.clear();
        self.content.push_str(stylesheet);
    }

    pub fn release(&mut self) {
        self.content.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The `<style>` element for the page head. Always exactly one element,
    /// empty when released.
    pub fn render(&self) -> String {
        format!(
            r#"<style id="{}">{}</style>"#,
            STYLE_SLOT_ID,
            STYLE_CLOSE.replace_all(&self.content, r"<\/style")
        )
    }
}
