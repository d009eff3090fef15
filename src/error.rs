//! Error types for record store operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted document is missing, unreadable, or not a catalog document.
    #[error("storage corruption in {}: {source}", .path.display())]
    StorageCorruption {
        path: PathBuf,
        source: CorruptionError,
    },
    /// A stored entry does not have the shape of its collection's record.
    #[error("malformed record at {collection}[{index}]: {source}")]
    MalformedRecord {
        collection: &'static str,
        index: usize,
        source: serde_json::Error,
    },
    /// A new record could not be encoded as a document entry.
    #[error("cannot encode record for {collection}: {source}")]
    Encode {
        collection: &'static str,
        source: serde_json::Error,
    },
    /// Overwriting the persisted document failed.
    #[error("storage write to {} failed: {source}", .path.display())]
    StorageWrite { path: PathBuf, source: io::Error },
    /// The next id would overflow the numeric id space of a collection.
    #[error("id space exhausted for collection {0}")]
    IdExhausted(&'static str),
    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Why a persisted document could not be loaded.
#[derive(Debug, Error)]
pub enum CorruptionError {
    #[error("document unreadable: {0}")]
    Unreadable(#[from] io::Error),
    #[error("document is not valid: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn corruption(path: impl Into<PathBuf>, source: impl Into<CorruptionError>) -> Self {
        StoreError::StorageCorruption {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::StorageWrite {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the persisted document itself.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            StoreError::StorageCorruption { .. } | StoreError::MalformedRecord { .. }
        )
    }

    /// True when the document could not be overwritten.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, StoreError::StorageWrite { .. })
    }
}
