//! JsonFileStore - the catalog document as a pretty-printed JSON file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use super::{append, RecordStore};
use crate::error::StoreError;
use crate::record::{Document, Entry, Record};

/// Record store backed by one JSON document on disk.
///
/// Every call re-reads the whole file; every create rewrites the whole file.
/// Calls are serialized through one writer lock shared by all clones, so
/// concurrent creates never compute the same id or drop each other's
/// appends. Other processes writing the same file are not coordinated.
#[derive(Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    writer: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open an existing document. Fails with `StorageCorruption` if the file
    /// is missing or is not a catalog document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::unchecked(path.into());
        let document = store.load()?;
        debug!(
            path = %store.path.display(),
            car_models = document.car_models.len(),
            products = document.products.len(),
            "opened catalog document"
        );
        Ok(store)
    }

    /// Open a document, first writing an empty one if the path does not exist.
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| StoreError::write(parent, e))?;
            }
            info!(path = %path.display(), "creating empty catalog document");
            write_document(&path, &Document::new())?;
        }
        Self::open(path)
    }

    fn unchecked(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document.
    pub fn load(&self) -> Result<Document, StoreError> {
        let _guard = self.lock("load")?;
        read_document(&self.path)
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.writer
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

impl RecordStore for JsonFileStore {
    fn entries<R: Record>(&self) -> Result<Vec<Entry>, StoreError> {
        let mut document = self.load()?;
        let entries = std::mem::take(R::collection_mut(&mut document));
        debug!(collection = R::COLLECTION, count = entries.len(), "listed records");
        Ok(entries)
    }

    fn create<R: Record>(&self, record: R) -> Result<R, StoreError> {
        let _guard = self.lock("create")?;
        let mut document = read_document(&self.path)?;
        let stored = append(&mut document, record)?;
        write_document(&self.path, &document)?;
        info!(collection = R::COLLECTION, id = stored.id(), "record created");
        Ok(stored)
    }
}

fn read_document(path: &Path) -> Result<Document, StoreError> {
    let bytes = fs::read(path).map_err(|e| StoreError::corruption(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::corruption(path, e))
}

/// Replace the document atomically: write a sibling `.tmp` file, sync it,
/// then rename it over the original.
fn write_document(path: &Path, document: &Document) -> Result<(), StoreError> {
    let mut bytes = serde_json::to_vec_pretty(document)
        .map_err(|e| StoreError::write(path, io::Error::new(io::ErrorKind::InvalidData, e)))?;
    bytes.push(b'\n');

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let result = File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));

    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temporary document");
            }
        }
        return Err(StoreError::write(path, e));
    }
    Ok(())
}
