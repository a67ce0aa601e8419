//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("invalid record key '{0}'")]
    InvalidKey(String),
}

impl RepositoryError {
    /// Classifies the failure for recovery and logging.
    pub fn fault(&self) -> StorageFault {
        match self {
            Self::Json(_) | Self::CorruptedData(_) => StorageFault::MalformedRecord,
            Self::LockPoisoned | Self::Io(_) | Self::InvalidKey(_) => {
                StorageFault::StorageUnavailable
            }
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

/// Recovery class of a storage failure.
///
/// Both classes are recovered locally: the caller keeps its in-memory state
/// or falls back to defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageFault {
    /// The store could not be read or written.
    StorageUnavailable,
    /// A stored record could not be understood.
    MalformedRecord,
}

impl StorageFault {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StorageUnavailable => "storage_unavailable",
            Self::MalformedRecord => "malformed_record",
        }
    }
}

impl std::fmt::Display for StorageFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
