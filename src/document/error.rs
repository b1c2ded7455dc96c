use std::io;
use std::path::{
    Path,
    PathBuf,
};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while loading, patching or writing a locale document.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Locale document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    /// The file content is not UTF-8.
    #[error("Locale document {} is not valid UTF-8: {source}", path.display())]
    EncodingError {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Malformed locale document {}: {reason}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        reason: MalformedReason,
    },

    #[error("Section '{section}' is missing from {}", path.display())]
    MissingSection { path: PathBuf, section: String },

    #[error("Section '{section}' in {} is not an object", path.display())]
    InvalidSection { path: PathBuf, section: String },

    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Why a locale document could not be used as a key/value mapping.
#[derive(Error, Debug)]
pub enum MalformedReason {
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    #[error("expected an object at the top level, found {found}")]
    NotAnObject { found: &'static str },
}

impl PatchError {
    /// Path of the document the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::DocumentNotFound { path }
            | Self::EncodingError { path, .. }
            | Self::MalformedDocument { path, .. }
            | Self::MissingSection { path, .. }
            | Self::InvalidSection { path, .. }
            | Self::Serialize { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}
