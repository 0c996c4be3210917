use thiserror::Error;

/// Failure of the underlying key-value storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("storage quota exceeded writing {key} ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },
    #[error("storage io error: {0}")]
    Io(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Failure of a content save. No change notification fires when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("failed to serialize site content: {0}")]
    Serialize(String),
    #[error("site content rejected: {0}")]
    Invalid(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failure of the optional remote content transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("remote request failed: {0}")]
    Request(String),
    #[error("remote returned status {status}")]
    Status { status: u16 },
    #[error("remote has no content row for language {0}")]
    NotFound(String),
    #[error("remote payload could not be decoded: {0}")]
    Decode(String),
}

/// Failure building a translation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog for {language} is malformed: {reason}")]
    Malformed { language: String, reason: String },
    #[error("catalog io error: {0}")]
    Io(String),
}

/// Failure loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A language code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

/// Failure of a project list operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("invalid project: {0}")]
    Validation(#[from] crate::projects::ValidationErrors),
    #[error("project not found: {0}")]
    NotFound(String),
    #[error("position {index} is out of range for {len} projects")]
    OutOfRange { index: usize, len: usize },
    #[error("failed to serialize projects: {0}")]
    Serialize(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
