//! Record Store - list and append records of the persisted document.
//!
//! Two backends share the same semantics:
//! - [`JsonFileStore`]: the document on disk, re-read on every call and
//!   rewritten in full on every create.
//! - [`InMemoryRecordStore`]: the same document held in process, for tests
//!   and development.
//!
//! Stored entries are never re-encoded. A create appends one new entry and
//! leaves every other byte of the collection's data as it was read.
//!
//! ## Example
//!
//! ```ignore
//! use hp_catalog::{AftermarketProduct, InMemoryRecordStore, RecordsExt};
//!
//! let store = InMemoryRecordStore::new();
//! let stored = store.records::<AftermarketProduct>().create(product)?;
//! assert_eq!(stored.id, "1");
//! ```

mod in_memory;
mod json_file;
mod record_repository;

use serde::Deserialize;

use crate::error::StoreError;
use crate::record::{entry_id, Document, Entry, Record};

pub use in_memory::InMemoryRecordStore;
pub use json_file::JsonFileStore;
pub use record_repository::{Records, RecordsExt};

/// Abstract storage for the catalog collections.
pub trait RecordStore: Send + Sync {
    /// `R`'s collection exactly as persisted, in document order.
    fn entries<R: Record>(&self) -> Result<Vec<Entry>, StoreError>;

    /// Every record of `R`'s collection, decoded, in document order.
    ///
    /// Fails with `MalformedRecord` if any entry does not fit `R`.
    fn list<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        decode(&self.entries::<R>()?)
    }

    /// Append a record, replacing its id with the next free one.
    /// Returns the record as stored.
    fn create<R: Record>(&self, record: R) -> Result<R, StoreError>;
}

/// Compute the id following the given ones: the largest numeric id plus one.
///
/// Ids that are not unsigned decimal integers are ignored. With no numeric
/// ids at all the sequence starts at `"1"`.
pub fn next_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let max = ids.into_iter().filter_map(|id| id.parse::<u64>().ok()).max();
    match max {
        Some(max) => max.checked_add(1).map(|n| n.to_string()),
        None => Some("1".to_string()),
    }
}

/// Decode stored entries as `R`, in order.
pub(crate) fn decode<R: Record>(entries: &[Entry]) -> Result<Vec<R>, StoreError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_entry(index, entry))
        .collect()
}

/// Decode only the entries whose id is in `ids`. Other entries are not
/// inspected, so a malformed record elsewhere in the collection is ignored.
pub(crate) fn decode_selected<R: Record>(
    entries: &[Entry],
    ids: &[String],
) -> Result<Vec<R>, StoreError> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry_id(entry).is_some_and(|id| ids.contains(&id)))
        .map(|(index, entry)| decode_entry(index, entry))
        .collect()
}

fn decode_entry<R: Record>(index: usize, entry: &Entry) -> Result<R, StoreError> {
    R::deserialize(entry).map_err(|source| StoreError::MalformedRecord {
        collection: R::COLLECTION,
        index,
        source,
    })
}

/// Assign the next id to `record` and append it to its collection.
///
/// Existing entries are only read for their ids.
pub(crate) fn append<R: Record>(document: &mut Document, mut record: R) -> Result<R, StoreError> {
    let collection = R::collection_mut(document);
    let ids: Vec<String> = collection.iter().filter_map(entry_id).collect();
    let id = next_id(ids.iter().map(String::as_str))
        .ok_or(StoreError::IdExhausted(R::COLLECTION))?;
    record.set_id(id);
    let entry = serde_json::to_value(&record).map_err(|source| StoreError::Encode {
        collection: R::COLLECTION,
        source,
    })?;
    collection.push(entry);
    Ok(record)
}
