//! Deserializers for numeric fields that also accept numeric strings.
//!
//! HTML form inputs submit their values as strings, so documents written by
//! browser clients hold `"year": "2020"` as often as `"year": 2020`. New
//! records are written with JSON numbers.

use serde::de::{Deserializer, Error};
use serde::{Deserialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Integer(i64),
    Float(f64),
    Text(String),
}

pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    finite(NumberOrString::deserialize(deserializer)?)
}

/// Like [`number`], but `null` reads as zero. A form that submits an empty
/// numeric input leaves `null` behind.
pub(crate) fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => finite(value),
        None => Ok(0.0),
    }
}

fn finite<E: Error>(value: NumberOrString) -> Result<f64, E> {
    let value = match value {
        NumberOrString::Integer(n) => n as f64,
        NumberOrString::Float(n) => n,
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid number: {s:?}")))?,
    };
    if !value.is_finite() {
        return Err(E::custom("number must be finite"));
    }
    Ok(value)
}

pub(crate) fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Integer(n) => {
            i32::try_from(n).map_err(|_| D::Error::custom(format!("integer out of range: {n}")))
        }
        NumberOrString::Float(n) => Err(D::Error::custom(format!("expected an integer, got {n}"))),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| D::Error::custom(format!("invalid integer: {s:?}"))),
    }
}

/// Whole values are written as integers (`300`, not `300.0`).
pub(crate) fn write_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Ids are strings, but hand-seeded documents sometimes hold bare integers.
pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Integer(n) => Ok(n.to_string()),
        NumberOrString::Float(n) => Err(D::Error::custom(format!("invalid id: {n}"))),
        NumberOrString::Text(s) => Ok(s),
    }
}
