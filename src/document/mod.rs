//! ロケールドキュメント（翻訳 JSON ファイル）の読み込み・パッチ適用・書き込み

mod error;
mod format;
mod write;

use std::fs;
use std::io;
use std::path::{
    Path,
    PathBuf,
};

pub use error::{
    MalformedReason,
    PatchError,
};
pub use format::DocumentFormat;
use serde_json::{
    Map,
    Value,
};
pub use write::{
    WriteMode,
    write_document,
};

use crate::patch::{
    PARENT_SECTION,
    PatchSet,
};

/// What [`LocaleDocument::apply`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchSummary {
    /// A `parent` section existed before the patch.
    pub had_parent: bool,
    pub parent_changed: bool,
    /// Number of override keys whose value changed.
    pub overrides_changed: usize,
}

impl PatchSummary {
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.parent_changed || self.overrides_changed > 0
    }
}

/// A locale file held in memory as an ordered JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDocument {
    /// Source file, also the write target
    path: PathBuf,
    /// Top-level object
    root: Map<String, Value>,
}

impl LocaleDocument {
    /// Read and parse a locale document.
    ///
    /// # Errors
    /// - `DocumentNotFound`: `path` does not exist
    /// - `EncodingError`: the content is not UTF-8
    /// - `MalformedDocument`: not JSON, or the top level is not an object
    /// - `Io`: any other read failure
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PatchError> {
        let path = path.into();
        tracing::debug!(path = %path.display(), "Loading locale document");

        let bytes = fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                PatchError::DocumentNotFound { path: path.clone() }
            } else {
                PatchError::Io { path: path.clone(), action: "read", source }
            }
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|source| PatchError::EncodingError { path: path.clone(), source })?;

        Self::parse(path, &text)
    }

    /// Parse `text` as the content of the document at `path`.
    ///
    /// # Errors
    /// `MalformedDocument` when `text` is not a JSON object.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self, PatchError> {
        let path = path.into();
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                return Err(PatchError::MalformedDocument { path, reason: e.into() });
            }
        };

        match value {
            Value::Object(root) => Ok(Self { path, root }),
            other => Err(PatchError::MalformedDocument {
                path,
                reason: MalformedReason::NotAnObject { found: kind_name(&other) },
            }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Nested section by name, if present and an object.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.root.get(name).and_then(Value::as_object)
    }

    /// Apply a patch set.
    ///
    /// The `parent` section is replaced wholesale, then every override is
    /// written into its (pre-existing) section. All sections are checked
    /// before anything is modified, so on error the document is unchanged.
    ///
    /// # Errors
    /// - `MissingSection`: an override targets a section the document lacks
    /// - `InvalidSection`: that section exists but is not an object
    pub fn apply(&mut self, patch: &PatchSet) -> Result<PatchSummary, PatchError> {
        self.check_sections(patch)?;

        let new_parent = Value::Object(patch.parent_section());
        let previous = self.root.insert(PARENT_SECTION.to_string(), new_parent);
        let mut summary = PatchSummary {
            had_parent: previous.is_some(),
            parent_changed: previous.as_ref() != self.root.get(PARENT_SECTION),
            overrides_changed: 0,
        };

        for o in patch.overrides {
            let section = self.section_mut(o.section)?;
            let value = Value::String(o.value.to_string());
            if section.get(o.key) != Some(&value) {
                summary.overrides_changed += 1;
            }
            section.insert(o.key.to_string(), value);
        }

        tracing::debug!(
            path = %self.path.display(),
            locale = %patch.locale,
            had_parent = summary.had_parent,
            overrides_changed = summary.overrides_changed,
            "Applied patch"
        );
        Ok(summary)
    }

    /// Serialize the document.
    ///
    /// # Errors
    /// `Serialize` if the in-memory value cannot be written as JSON.
    pub fn to_bytes(&self, format: DocumentFormat) -> Result<Vec<u8>, PatchError> {
        format
            .to_bytes(&self.root)
            .map_err(|source| PatchError::Serialize { path: self.path.clone(), source })
    }

    /// Serialize and write the document back to its path.
    ///
    /// # Errors
    /// `Serialize` or `Io` (write).
    pub fn save(&self, format: DocumentFormat, mode: WriteMode) -> Result<(), PatchError> {
        let content = self.to_bytes(format)?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), ?mode, "Writing locale document");

        write_document(&self.path, &content, mode).map_err(|source| PatchError::Io {
            path: self.path.clone(),
            action: "write",
            source,
        })
    }

    /// Every non-`parent` section targeted by an override must be an object.
    fn check_sections(&self, patch: &PatchSet) -> Result<(), PatchError> {
        let targets = patch.overrides.iter().map(|o| o.section).filter(|s| *s != PARENT_SECTION);
        for section in targets {
            match self.root.get(section) {
                Some(Value::Object(_)) => {}
                Some(_) => {
                    return Err(PatchError::InvalidSection {
                        path: self.path.clone(),
                        section: section.to_string(),
                    });
                }
                None => {
                    return Err(PatchError::MissingSection {
                        path: self.path.clone(),
                        section: section.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut Map<String, Value>, PatchError> {
        match self.root.get_mut(name) {
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(PatchError::InvalidSection {
                path: self.path.clone(),
                section: name.to_string(),
            }),
            None => Err(PatchError::MissingSection {
                path: self.path.clone(),
                section: name.to_string(),
            }),
        }
    }
}

/// JSON type name for error messages.
const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
