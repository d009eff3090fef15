//! hp_catalog: a catalog of car models and aftermarket performance products.
//!
//! Records live in a single JSON document with two collections
//! (`carModels` and `products`). The [`RecordStore`] lists a collection or
//! appends one record to it, assigning the next numeric id. The
//! [`horsepower`] module sums a chosen car's stock rating with the gains of
//! a chosen set of products.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hp_catalog::{CarModel, JsonFileStore, RecordsExt};
//!
//! let store = JsonFileStore::open("db.json")?;
//! let cars = store.records::<CarModel>().list()?;
//! let raw = store.records::<CarModel>().entries()?;
//! let stored = store.records::<CarModel>().create(car)?;
//! assert_eq!(stored.id, "3");
//! ```
//!
//! The `http` feature (on by default) adds an axum router exposing the
//! collections as `GET`/`POST /car-models` and `GET`/`POST /products`.

// Lets `#[derive(Record)]` expand to `::hp_catalog::...` inside this crate too.
extern crate self as hp_catalog;

mod error;
pub mod horsepower;
#[cfg(feature = "http")]
pub mod http;
mod record;
pub mod search;
mod store;

pub use error::{CorruptionError, StoreError};
pub use horsepower::{estimate, HorsepowerEstimate, Selection};
pub use record::{
    entry_id, AftermarketProduct, CarModel, Category, Document, Draft, Entry, NewCarModel,
    NewProduct, PerformanceGains, Record,
};
pub use store::{next_id, InMemoryRecordStore, JsonFileStore, RecordStore, Records, RecordsExt};

pub use hp_catalog_macros::Record;
