//! Route handlers. Store calls run on the blocking pool.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ApiError;
use crate::error::StoreError;
use crate::horsepower::{HorsepowerEstimate, Selection};
use crate::record::{AftermarketProduct, CarModel, Draft, Entry, Record};
use crate::store::{decode_selected, RecordStore};

/// `POST /horsepower` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorsepowerRequest {
    pub car_id: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

/// `POST /horsepower` response: the selection and its estimate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorsepowerResponse {
    pub car: CarModel,
    pub products: Vec<AftermarketProduct>,
    #[serde(flatten)]
    pub estimate: HorsepowerEstimate,
}

/// Run a store call on tokio's blocking pool.
async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

/// `GET /health`: returns `{ "ok": true, "collections": [...] }`.
pub(super) async fn health() -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "collections": [CarModel::COLLECTION, AftermarketProduct::COLLECTION],
    }))
}

/// `GET /<collection>`: every record in document order, as stored.
pub(super) async fn list<S, R>(State(store): State<Arc<S>>) -> Result<Json<Vec<Entry>>, ApiError>
where
    S: RecordStore + 'static,
    R: Record,
{
    let entries = blocking(move || store.entries::<R>()).await?;
    Ok(Json(entries))
}

/// `POST /<collection>`: validate the body as a draft, then append it.
pub(super) async fn create<S, D>(
    State(store): State<Arc<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<D::Record>), ApiError>
where
    S: RecordStore + 'static,
    D: Draft,
{
    let Json(input) = body?;
    let draft: D = serde_json::from_value(input)?;
    let stored = blocking(move || store.create(draft.into_record())).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `POST /horsepower`: resolve the ids against the store and sum the gains.
///
/// Unknown product ids are skipped and repeated ids count once. Without a
/// `carId` there is no result and the body is `null`. An unknown car id
/// yields 404.
pub(super) async fn horsepower<S>(
    State(store): State<Arc<S>>,
    body: Result<Json<HorsepowerRequest>, JsonRejection>,
) -> Result<Json<Option<HorsepowerResponse>>, ApiError>
where
    S: RecordStore + 'static,
{
    let Json(request) = body?;
    let Some(car_id) = request.car_id else {
        return Ok(Json(None));
    };

    let wanted_car = vec![car_id.clone()];
    let product_ids = request.product_ids.clone();
    let (cars, products) = blocking(move || {
        let cars = decode_selected::<CarModel>(&store.entries::<CarModel>()?, &wanted_car)?;
        let products = decode_selected::<AftermarketProduct>(
            &store.entries::<AftermarketProduct>()?,
            &product_ids,
        )?;
        Ok((cars, products))
    })
    .await?;

    let mut selection = Selection::new();
    selection.select_car(&cars, &car_id);
    for id in &request.product_ids {
        selection.add_product(&products, id);
    }

    let (Some(car), Some(estimate)) = (selection.car(), selection.estimate()) else {
        return Err(ApiError::NotFound(format!("car model {}", car_id)));
    };
    Ok(Json(Some(HorsepowerResponse {
        car: car.clone(),
        products: selection.products().iter().map(|p| (*p).clone()).collect(),
        estimate,
    })))
}
