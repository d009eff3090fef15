mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)] derive macro
// ============================================================================

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "carModels")]
/// struct CarModel {
///     #[record(id)]
///     pub id: String,
///     pub make: String,
/// }
/// ```
///
/// - `#[record(collection = "...")]` sets the collection key used in the
///   persisted document. If omitted, defaults to the camelCase struct name
///   plus "s". The matching `Document` field is the snake_case form of the
///   collection key (`carModels` lives in `Document::car_models`).
/// - `#[record(id)]` marks the field holding the store-assigned identifier.
///   If omitted, defaults to a field named `id`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
