// src/api/endpoints.rs
//! URL construction for the two REST calls a scan makes.

use crate::constants::{ITEM_EXPAND_FIELDS, ITEM_SELECT_FIELDS, LIBRARY_ITEM_PAGE_CAP};
use crate::types::{ListId, ResolvedLocation};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `GET {site}/_api/web/GetList(@v)?@v='<library path>'`
///
/// The library path is decoded first so a segment that already arrived
/// percent-encoded (`Shared%20Documents`) is not encoded twice, then quoted
/// as an OData string literal. A path whose escapes are not UTF-8 is
/// encoded as it stands.
pub fn list_metadata_url(location: &ResolvedLocation) -> String {
    let raw_path = location.library_path();
    let path = match percent_decode_str(raw_path).decode_utf8() {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!(
                "Library path {} does not decode to UTF-8 ({}); encoding it as is",
                raw_path,
                e
            );
            Cow::Borrowed(raw_path)
        }
    };
    let literal = path.replace('\'', "''");
    format!(
        "{}/_api/web/GetList(@v)?@v='{}'",
        location.site_url(),
        utf8_percent_encode(&literal, URI_COMPONENT)
    )
}

/// `GET {site}/_api/web/lists(guid'<id>')/items?$top=...&$select=...&$expand=...`
pub fn list_items_url(location: &ResolvedLocation, list_id: &ListId) -> String {
    format!(
        "{}/_api/web/lists(guid'{}')/items?$top={}&$select={}&$expand={}",
        location.site_url(),
        list_id.as_str(),
        LIBRARY_ITEM_PAGE_CAP,
        ITEM_SELECT_FIELDS,
        ITEM_EXPAND_FIELDS
    )
}
