//! Records - the two catalog entity shapes and the document holding them.
//!
//! Each record type names its collection in the persisted document:
//!
//! ```ignore
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! #[record(collection = "carModels")]
//! pub struct CarModel {
//!     pub id: String,
//!     // ...
//! }
//!
//! assert_eq!(CarModel::COLLECTION, "carModels");
//! let entries: &[Entry] = CarModel::collection(&document);
//! ```
//!
//! The document holds each collection as raw [`Entry`] values. Stored
//! entries are written back exactly as they were read; only the record
//! being created passes through its typed struct.

mod car_model;
pub(crate) mod lenient;
mod product;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

pub use car_model::{CarModel, NewCarModel};
pub use product::{AftermarketProduct, Category, NewProduct, PerformanceGains};

/// Trait for types stored as a collection of the persisted document.
///
/// Usually derived with `#[derive(Record)]`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The document key of this record's collection (e.g. `"carModels"`).
    const COLLECTION: &'static str;

    /// Returns the store-assigned identifier.
    fn id(&self) -> &str;

    /// Replaces the identifier. Only the store calls this.
    fn set_id(&mut self, id: String);

    /// This record's collection within a document.
    fn collection(document: &Document) -> &[Entry];

    /// Mutable access to this record's collection within a document.
    fn collection_mut(document: &mut Document) -> &mut Vec<Entry>;
}

/// One stored record exactly as persisted, unknown fields included.
pub type Entry = Value;

/// The id of a stored entry: a string, or a bare integer in hand-seeded
/// documents. Entries without a usable id yield `None`.
pub fn entry_id(entry: &Entry) -> Option<String> {
    match entry.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        _ => None,
    }
}

/// A create payload: a record minus its identifier.
pub trait Draft: DeserializeOwned + Send + 'static {
    type Record: Record;

    /// Build the record to store. The id is left empty for the store to assign.
    fn into_record(self) -> Self::Record;
}

/// The persisted document: both collections plus any other top-level keys.
///
/// Unknown top-level keys are carried through rewrites untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub car_models: Vec<Entry>,
    pub products: Vec<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// An empty document with both collections present.
    pub fn new() -> Self {
        Self::default()
    }
}
