//! Records - typed accessor for one collection of a store.

use std::marker::PhantomData;

use crate::error::StoreError;
use crate::record::{Entry, Record};

use super::{decode_selected, RecordStore};

/// Typed wrapper for accessing the records of one collection.
pub struct Records<'a, S, R> {
    store: &'a S,
    _marker: PhantomData<R>,
}

impl<'a, S: RecordStore, R: Record> Records<'a, S, R> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Every record of the collection, in document order.
    pub fn list(&self) -> Result<Vec<R>, StoreError> {
        self.store.list()
    }

    /// The collection exactly as persisted.
    pub fn entries(&self) -> Result<Vec<Entry>, StoreError> {
        self.store.entries::<R>()
    }

    /// Append a record; its id is assigned by the store.
    pub fn create(&self, record: R) -> Result<R, StoreError> {
        self.store.create(record)
    }

    /// Look up a record by id. Only the matching entry is decoded.
    pub fn find(&self, id: &str) -> Result<Option<R>, StoreError> {
        let entries = self.entries()?;
        let found = decode_selected::<R>(&entries, &[id.to_string()])?;
        Ok(found.into_iter().next())
    }
}

/// Extension trait for typed record access on any RecordStore.
pub trait RecordsExt: RecordStore + Sized {
    /// Get a typed accessor for `R`'s collection.
    fn records<R: Record>(&self) -> Records<'_, Self, R> {
        Records::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
