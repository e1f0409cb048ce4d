// src/scan.rs
//! The top-level scan operation: resolve, fetch, render.
//!
//! Any failure along the way is logged and turned into a failure display
//! model, so a scan always ends with something to show.

use crate::api::{HttpClient, LibraryClient};
use crate::error::AppError;
use crate::formatting::{render_failure, render_results, DisplayModel, TimeDisplay};
use crate::model::ScanResult;
use crate::pipeline::{LibrarySource, ResultComposer};
use crate::resolver::resolve;
use crate::types::SiteDepth;

/// Scans document libraries through an injected [`HttpClient`].
pub struct LibraryScanner<C> {
    client: LibraryClient<C>,
    site_depth: SiteDepth,
    clock: TimeDisplay,
}

impl<C: HttpClient> LibraryScanner<C> {
    pub fn new(http: C, site_depth: SiteDepth, clock: TimeDisplay) -> Self {
        Self {
            client: LibraryClient::new(http),
            site_depth,
            clock,
        }
    }

    /// Runs one scan to completion and returns what should be displayed.
    pub async fn scan(&self, library_url: &str) -> DisplayModel {
        match self.fetch(library_url).await {
            Ok(result) => self.compose(&result),
            Err(e) => {
                log::error!("Scan of {} failed: {}", library_url.trim(), e);
                if let Some(code) = e.status_code() {
                    if let Some(hint) = code.hint() {
                        log::warn!("Hint ({}): {}", code, hint);
                    }
                }
                render_failure(&e)
            }
        }
    }
}

#[async_trait::async_trait]
impl<C: HttpClient> LibrarySource for LibraryScanner<C> {
    async fn fetch(&self, library_url: &str) -> Result<ScanResult, AppError> {
        let location = resolve(library_url, self.site_depth)?;
        log::info!("{}", location);

        self.client.fetch_library(&location).await
    }
}

impl<C> ResultComposer for LibraryScanner<C> {
    fn compose(&self, result: &ScanResult) -> DisplayModel {
        render_results(&result.items, &result.metadata.title, self.clock)
    }
}
