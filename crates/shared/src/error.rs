use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("template at position {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate template id '{id}'")]
    DuplicateId { id: String },
    #[error("failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Raised when the platform rejects a clipboard write. Callers treat every
/// rejection the same way, so the reason is carried as text only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("clipboard write failed: {reason}")]
pub struct ClipboardWriteError {
    pub reason: String,
}

impl ClipboardWriteError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
