use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::document::{
    DocumentFormat,
    WriteMode,
};

/// Largest accepted `indent` value.
const MAX_INDENT: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localesDir")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatcherSettings {
    /// Directory holding `<locale>.json`, relative to the workspace root.
    pub locales_dir: String,

    /// Spaces per nesting level in the rewritten files.
    pub indent: usize,

    pub trailing_newline: bool,

    /// How the rewritten document replaces the original file.
    pub write_mode: WriteMode,
}

impl Default for PatcherSettings {
    fn default() -> Self {
        Self {
            locales_dir: "frontend/src/locales".to_string(),
            indent: 4,
            trailing_newline: false,
            write_mode: WriteMode::default(),
        }
    }
}

impl PatcherSettings {
    #[must_use]
    pub const fn format(&self) -> DocumentFormat {
        DocumentFormat { indent: self.indent, trailing_newline: self.trailing_newline }
    }

    /// # Errors
    /// - `localesDir` is empty or absolute
    /// - `indent` is too large
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locales_dir.is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Example: \"frontend/src/locales\"",
            ));
        } else if Path::new(&self.locales_dir).is_absolute() {
            errors.push(ValidationError::new(
                "localesDir",
                format!(
                    "The directory must be relative to the workspace root, got '{}'",
                    self.locales_dir
                ),
            ));
        }

        if self.indent > MAX_INDENT {
            errors.push(ValidationError::new(
                "indent",
                format!("Indentation must be at most {MAX_INDENT} spaces, got {}", self.indent),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
