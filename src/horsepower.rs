//! Horsepower Aggregator - theoretical output of a car with bolt-on products.
//!
//! Pure computation over records already fetched from a store; nothing here
//! touches persistence.
//!
//! ## Example
//!
//! ```ignore
//! use hp_catalog::horsepower::{estimate, Selection};
//!
//! let mut selection = Selection::new();
//! selection.select_car(&cars, "1");
//! selection.add_product(&products, "3");
//! let result = selection.estimate().unwrap();
//! println!("{} HP (+{})", result.theoretical_horsepower, result.horsepower_gain);
//! ```

use serde::Serialize;

use crate::record::lenient::write_number;
use crate::record::{AftermarketProduct, CarModel};

/// Result of summing a car's stock rating with its selected products' gains.
///
/// Whole values serialize as integers, matching the records they came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorsepowerEstimate {
    #[serde(serialize_with = "write_number")]
    pub base_horsepower: f64,
    #[serde(serialize_with = "write_number")]
    pub theoretical_horsepower: f64,
    /// `theoretical_horsepower - base_horsepower`.
    #[serde(serialize_with = "write_number")]
    pub horsepower_gain: f64,
    /// Sum of the products' torque gains. Cars carry no stock torque figure,
    /// so there is no theoretical torque total.
    #[serde(serialize_with = "write_number")]
    pub torque_gain: f64,
}

/// Sum `car`'s base horsepower with every product's hp gain.
///
/// Returns `None` when no car is selected. `products` is expected to hold
/// each product at most once; [`Selection`] guarantees that.
pub fn estimate<'a>(
    car: Option<&CarModel>,
    products: impl IntoIterator<Item = &'a AftermarketProduct>,
) -> Option<HorsepowerEstimate> {
    let car = car?;
    let (hp, torque) = products.into_iter().fold((0.0, 0.0), |(hp, torque), p| {
        (hp + p.performance_gains.hp, torque + p.performance_gains.torque)
    });
    let theoretical = car.base_horsepower + hp;
    Some(HorsepowerEstimate {
        base_horsepower: car.base_horsepower,
        theoretical_horsepower: theoretical,
        horsepower_gain: theoretical - car.base_horsepower,
        torque_gain: torque,
    })
}

/// A car and a duplicate-free set of products chosen from fetched lists.
///
/// Lookups by id tolerate misses: selecting an unknown id changes nothing.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    car: Option<&'a CarModel>,
    products: Vec<&'a AftermarketProduct>,
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the car with `id`. Returns false (and clears the selection)
    /// if no car has that id.
    pub fn select_car(&mut self, cars: &'a [CarModel], id: &str) -> bool {
        self.car = cars.iter().find(|c| c.id == id);
        self.car.is_some()
    }

    /// Add the product with `id`. Returns false if it is unknown or already selected.
    pub fn add_product(&mut self, products: &'a [AftermarketProduct], id: &str) -> bool {
        if self.products.iter().any(|p| p.id == id) {
            return false;
        }
        match products.iter().find(|p| p.id == id) {
            Some(product) => {
                self.products.push(product);
                true
            }
            None => false,
        }
    }

    /// Remove the product with `id`. Returns true if it was selected.
    pub fn remove_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    pub fn car(&self) -> Option<&'a CarModel> {
        self.car
    }

    /// Selected products in the order they were added.
    pub fn products(&self) -> &[&'a AftermarketProduct] {
        &self.products
    }

    pub fn estimate(&self) -> Option<HorsepowerEstimate> {
        estimate(self.car, self.products.iter().copied())
    }
}
