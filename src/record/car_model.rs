use serde::{Deserialize, Serialize};

use super::{lenient, Draft};
use crate::Record;

/// A stock car model and its factory horsepower rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "carModels")]
pub struct CarModel {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub make: String,
    pub model: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub year: i32,
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::write_number")]
    pub base_horsepower: f64,
    pub engine_specs: String,
}

impl CarModel {
    /// Display label used by listings: `Make Model (Year)`.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

/// `POST /car-models` payload. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCarModel {
    pub make: String,
    pub model: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub year: i32,
    #[serde(deserialize_with = "lenient::number")]
    pub base_horsepower: f64,
    pub engine_specs: String,
}

impl Draft for NewCarModel {
    type Record = CarModel;

    fn into_record(self) -> CarModel {
        CarModel {
            id: String::new(),
            make: self.make,
            model: self.model,
            year: self.year,
            base_horsepower: self.base_horsepower,
            engine_specs: self.engine_specs,
        }
    }
}
