// src/api/library_client.rs
//! The two dependent calls that read a library: metadata, then items.

use super::endpoints::{list_items_url, list_metadata_url};
use super::parser::{parse_list_items, parse_list_metadata};
use super::HttpClient;
use crate::constants::ODATA_VERBOSE_ACCEPT;
use crate::error::AppError;
use crate::model::{LibraryItem, LibraryMetadata, ScanResult};
use crate::types::{ListId, ResolvedLocation};
use reqwest::header::{self, HeaderMap, HeaderValue};

/// Reads a document library's metadata and items through an [`HttpClient`].
pub struct LibraryClient<C> {
    http: C,
    headers: HeaderMap,
}

impl<C: HttpClient> LibraryClient<C> {
    pub fn new(http: C) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(ODATA_VERBOSE_ACCEPT),
        );
        Self { http, headers }
    }

    /// Step 1: look the library up by its server-relative path.
    ///
    /// The internal URL name is not necessarily the display title, so the
    /// lookup goes through `GetList` rather than searching by title.
    pub async fn fetch_metadata(
        &self,
        location: &ResolvedLocation,
    ) -> Result<LibraryMetadata, AppError> {
        log::info!(
            "Looking up library {} on {}",
            location.library_name(),
            location.site_url()
        );

        let url = list_metadata_url(location);
        let json = self.http.get_json(&url, &self.headers).await?;
        let metadata = parse_list_metadata(json, location)?;

        log::info!("Found library: {} (Id: {})", metadata.title, metadata.id);
        if !metadata.id.is_guid() {
            log::warn!("List Id {} is not a GUID; the item listing may be rejected", metadata.id);
        }
        Ok(metadata)
    }

    /// Step 2: list up to one capped page of items.
    pub async fn fetch_items(
        &self,
        location: &ResolvedLocation,
        list_id: &ListId,
    ) -> Result<Vec<LibraryItem>, AppError> {
        let url = list_items_url(location, list_id);
        let json = self.http.get_json(&url, &self.headers).await?;
        let items = parse_list_items(json);

        log::info!("Retrieved {} items", items.len());
        Ok(items)
    }

    /// Runs both steps in order; the second needs the identifier from the first.
    pub async fn fetch_library(&self, location: &ResolvedLocation) -> Result<ScanResult, AppError> {
        let metadata = self.fetch_metadata(location).await?;
        let items = self.fetch_items(location, &metadata.id).await?;
        Ok(ScanResult { metadata, items })
    }
}
