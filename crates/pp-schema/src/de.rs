//! Serde helpers shared by the schema types.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating an explicit `null` like a missing field.
///
/// Combine with `#[serde(default)]` so both absent and `null` produce
/// `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional hint string. Values of any other JSON type are
/// dropped instead of failing the enclosing structure.
pub(crate) fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
