// src/api/parser.rs
//! Turns raw REST responses into domain types.
//!
//! Status handling and JSON decoding live here so that every `HttpClient`
//! implementation reports failures the same way.

use super::client::ApiResponse;
use super::responses::{ListItemRecord, ListItemsResponse, ListMetadataResponse, ODataEnvelope};
use crate::error::{body_excerpt, AppError};
use crate::model::{LibraryItem, LibraryMetadata, ModifiedTime};
use crate::types::{ListId, ResolvedLocation};
use serde_json::Value;

/// Checks the status and decodes the body as JSON.
pub fn parse_json_response(result: ApiResponse<String>) -> Result<Value, AppError> {
    if !result.status.is_success() {
        log::error!("HTTP {} from {}", result.status.as_u16(), result.url);
        return Err(AppError::http(
            result.status.as_u16(),
            result.url,
            &result.data,
        ));
    }

    serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", result.url, e);
        AppError::MalformedResponse {
            url: result.url.clone(),
            reason: format!("{}\n{}", e, body_excerpt(&result.data)),
        }
    })
}

/// Extracts list metadata from a `GetList(@v)` response.
///
/// A response without a `d.Id` is a [`AppError::MetadataMissing`]; an Id
/// that cannot be placed in the items URL is a validation error. A missing
/// title is tolerated and becomes an empty string.
pub fn parse_list_metadata(
    json: Value,
    location: &ResolvedLocation,
) -> Result<LibraryMetadata, AppError> {
    let missing = || AppError::MetadataMissing {
        library_path: location.library_path().to_string(),
    };

    let envelope: ODataEnvelope<ListMetadataResponse> =
        serde_json::from_value(json).map_err(|e| {
            log::warn!("Unexpected list metadata shape: {}", e);
            missing()
        })?;

    let body = envelope.d.ok_or_else(missing)?;
    let raw_id = body
        .id
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(missing)?;
    let id = ListId::parse(&raw_id)?;

    Ok(LibraryMetadata {
        id,
        title: body.title.unwrap_or_default(),
    })
}

/// Extracts library items from a `lists(guid'...')/items` response.
///
/// A response without a results array yields no items rather than an
/// error. Entries that are not objects are skipped.
pub fn parse_list_items(json: Value) -> Vec<LibraryItem> {
    let results = match serde_json::from_value::<ODataEnvelope<ListItemsResponse>>(json) {
        Ok(envelope) => envelope.d.and_then(|d| d.results),
        Err(e) => {
            log::warn!("Unexpected item listing shape: {}", e);
            None
        }
    };

    let Some(results) = results else {
        log::warn!("Item listing has no results array; treating as empty");
        return Vec::new();
    };

    results
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<ListItemRecord>(raw) {
            Ok(record) => Some(into_library_item(record)),
            Err(e) => {
                log::warn!("Skipping unreadable item #{}: {}", index, e);
                None
            }
        })
        .collect()
}

fn into_library_item(record: ListItemRecord) -> LibraryItem {
    LibraryItem {
        name: record.file_leaf_ref,
        title: record.title,
        path: record.file_ref.unwrap_or_default(),
        modified_at: record
            .modified
            .filter(|m| !m.is_empty())
            .map(ModifiedTime::parse),
        editor_name: record.editor.and_then(|e| e.title).unwrap_or_default(),
    }
}
