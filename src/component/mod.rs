//! The generated component entity and the reply interpreter that produces it

pub mod error;
pub mod interpreter;

use serde::{Deserialize, Serialize};

pub use error::GenerationError;
pub use interpreter::{interpret, DEFAULT_NAME, MISSING_MARKUP};

/// Name shown before anything has been generated.
pub const UNTITLED_NAME: &str = "Untitled Component";

/// One generated UI component. Always built complete and replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedComponent {
    pub name: String,
    pub markup: String,
    pub stylesheet: String,
}

impl GeneratedComponent {
    pub fn new(
        name: impl Into<String>,
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
            stylesheet: stylesheet.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(UNTITLED_NAME, "", "")
    }

    pub fn is_blank(&self) -> bool {
        self.markup.trim().is_empty()
    }

    /// Raw source handed to copy and export, byte-for-byte from the stored strings.
    pub fn export_text(&self) -> String {
        format!("\n{}\n\n/* CSS */\n{}", self.markup, self.stylesheet)
    }
}

impl Default for GeneratedComponent {
    fn default() -> Self {
        Self::empty()
    }
}
