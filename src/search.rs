//! Catalog search and reference resolution over fetched records.

use crate::record::{AftermarketProduct, CarModel};

/// Substring matching used by catalog listings.
pub trait Searchable {
    fn matches(&self, term: &str) -> bool;
}

impl Searchable for CarModel {
    /// Case-insensitive on make and model; plain substring on the year.
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.make.to_lowercase().contains(&needle)
            || self.model.to_lowercase().contains(&needle)
            || self.year.to_string().contains(term)
    }
}

impl Searchable for AftermarketProduct {
    /// Case-insensitive on name, category and vendor.
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [&self.name, &self.category, &self.vendor]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records matching `term`, in their original order. An empty term matches all.
pub fn filter<'a, T: Searchable>(records: &'a [T], term: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches(term)).collect()
}

/// The car models a product lists as compatible.
///
/// Ids with no matching car are skipped.
pub fn resolve_compatible<'a>(
    product: &AftermarketProduct,
    cars: &'a [CarModel],
) -> Vec<&'a CarModel> {
    product
        .compatible_models
        .iter()
        .filter_map(|id| cars.iter().find(|c| &c.id == id))
        .collect()
}
