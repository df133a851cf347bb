//! Field normalization shared by the input records
//!
//! The exports are loosely typed: text fields may be `null` and `isPositive`
//! is not always a real boolean. These helpers are wired in through
//! `#[serde(deserialize_with = ...)]`, which also makes the field required.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Trim surrounding whitespace, falling back to the empty string
pub fn compact(text: Option<&str>) -> String {
    text.unwrap_or_default().trim().to_string()
}

/// Deserialize a text field that must be present but may be `null`
pub fn nullable_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Deserialize any JSON value into a boolean using JSON truthiness
///
/// `false`, `null`, `0`, `""`, `[]` and `{}` are false, everything else is true.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Deserialize a collection, treating `null` as empty
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
