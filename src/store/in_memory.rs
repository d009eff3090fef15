//! InMemoryRecordStore - document-in-memory record store for testing and development.

use std::sync::{Arc, RwLock};

use tracing::info;

use super::{append, RecordStore};
use crate::error::StoreError;
use crate::record::{Document, Entry, Record};

/// In-memory record store holding one `Document`.
///
/// Same id assignment as [`JsonFileStore`](super::JsonFileStore), without
/// the disk. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    document: Arc<RwLock<Document>>,
}

impl InMemoryRecordStore {
    /// Create a store over an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing document.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Arc::new(RwLock::new(document)),
        }
    }

    /// A copy of the current document.
    pub fn snapshot(&self) -> Result<Document, StoreError> {
        let document = self
            .document
            .read()
            .map_err(|_| StoreError::LockPoisoned("snapshot"))?;
        Ok(document.clone())
    }
}

impl RecordStore for InMemoryRecordStore {
    fn entries<R: Record>(&self) -> Result<Vec<Entry>, StoreError> {
        let document = self
            .document
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(R::collection(&document).to_vec())
    }

    fn create<R: Record>(&self, record: R) -> Result<R, StoreError> {
        let mut document = self
            .document
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;
        let stored = append(&mut document, record)?;
        info!(collection = R::COLLECTION, id = stored.id(), "record created");
        Ok(stored)
    }
}
