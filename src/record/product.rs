use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{lenient, Draft};
use crate::Record;

/// Horsepower and torque deltas contributed by installing a product.
///
/// Either value may be absent or `null` in stored documents; both count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceGains {
    #[serde(
        default,
        deserialize_with = "lenient::number_or_zero",
        serialize_with = "lenient::write_number"
    )]
    pub hp: f64,
    #[serde(
        default,
        deserialize_with = "lenient::number_or_zero",
        serialize_with = "lenient::write_number"
    )]
    pub torque: f64,
}

/// An aftermarket part and the car models it fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "products")]
pub struct AftermarketProduct {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
    pub category: String,
    /// Ids of compatible `CarModel`s. Not checked against the car collection;
    /// ids that no longer resolve are skipped at lookup time.
    #[serde(default)]
    pub compatible_models: BTreeSet<String>,
    #[serde(default)]
    pub performance_gains: PerformanceGains,
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::write_number")]
    pub price: f64,
    pub vendor: String,
}

impl AftermarketProduct {
    /// The product's category if it is one of the known labels.
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn fits(&self, car_id: &str) -> bool {
        self.compatible_models.contains(car_id)
    }
}

/// `POST /products` payload. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub compatible_models: BTreeSet<String>,
    pub performance_gains: PerformanceGains,
    #[serde(deserialize_with = "lenient::number")]
    pub price: f64,
    pub vendor: String,
}

impl Draft for NewProduct {
    type Record = AftermarketProduct;

    fn into_record(self) -> AftermarketProduct {
        AftermarketProduct {
            id: String::new(),
            name: self.name,
            category: self.category,
            compatible_models: self.compatible_models,
            performance_gains: self.performance_gains,
            price: self.price,
            vendor: self.vendor,
        }
    }
}

/// Category labels offered when cataloging a product.
///
/// The store accepts any category string; these are the labels clients
/// present for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Performance,
    OffRoad,
    Aesthetic,
    Maintenance,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Performance,
        Category::OffRoad,
        Category::Aesthetic,
        Category::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Performance => "Performance",
            Category::OffRoad => "Off-Road",
            Category::Aesthetic => "Aesthetic",
            Category::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}
