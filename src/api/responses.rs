// src/api/responses.rs
//! Wire types for the platform's verbose OData JSON envelope.
//!
//! The shapes are dictated by the REST API. Every field is optional and
//! tolerant of unexpected types: a value we cannot read becomes `None`,
//! and the parser decides whether that is an error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The `{"d": ...}` envelope wrapping every verbose OData response.
#[derive(Debug, Clone, Deserialize)]
pub struct ODataEnvelope<T> {
    pub d: Option<T>,
}

/// Body of `GetList(@v)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMetadataResponse {
    #[serde(rename = "Id", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
}

/// Body of `lists(guid'...')/items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemsResponse {
    /// Raw entries; each one is decoded separately so that a single odd
    /// entry does not discard the whole listing.
    #[serde(default, deserialize_with = "lenient_array")]
    pub results: Option<Vec<Value>>,
}

/// One entry of the item listing, restricted to the projected fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemRecord {
    #[serde(rename = "FileLeafRef", default, deserialize_with = "lenient_string")]
    pub file_leaf_ref: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "FileRef", default, deserialize_with = "lenient_string")]
    pub file_ref: Option<String>,
    #[serde(rename = "Modified", default, deserialize_with = "lenient_string")]
    pub modified: Option<String>,
    #[serde(rename = "Editor", default)]
    pub editor: Option<UserLookup>,
}

/// An expanded user lookup (`Editor/Title`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserLookup {
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
}

/// Accepts strings, numbers and booleans as text; anything else is `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_array<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    })
}
