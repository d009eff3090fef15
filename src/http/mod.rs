//! HTTP transport - the catalog collections as a JSON API.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /car-models` / `POST /car-models`: list or create car models.
//! - `GET /products` / `POST /products`: list or create aftermarket products.
//! - `POST /horsepower`: theoretical horsepower for `{ carId, productIds }`.
//! - `GET /health`: `{ "ok": true, "collections": [...] }`.
//!
//! Creates respond `201 Created` with the stored record. Failures respond
//! with `{ "error": "..." }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hp_catalog::{http, JsonFileStore};
//!
//! let store = Arc::new(JsonFileStore::open("db.json")?);
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly until the shutdown future resolves
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! http::serve(store, listener, std::future::pending()).await?;
//! ```

mod error;
mod routes;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::record::{AftermarketProduct, CarModel, NewCarModel, NewProduct};
use crate::store::RecordStore;

pub use error::ApiError;
pub use routes::{HorsepowerRequest, HorsepowerResponse};

/// Build an axum `Router` serving the catalog from the given store.
pub fn router<S: RecordStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/car-models",
            get(routes::list::<S, CarModel>).post(routes::create::<S, NewCarModel>),
        )
        .route(
            "/products",
            get(routes::list::<S, AftermarketProduct>).post(routes::create::<S, NewProduct>),
        )
        .route("/horsepower", post(routes::horsepower::<S>))
        .with_state(store)
}

/// Serve the catalog on `listener` until `shutdown` resolves.
pub async fn serve<S, F>(store: Arc<S>, listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    S: RecordStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(store);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
