// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of a scan.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::formatting::DisplayModel;
use crate::model::ScanResult;
use crate::output::OutputReport;
use crate::types::RenderedReport;

/// Retrieves a library's metadata and items from its URL.
#[async_trait::async_trait]
pub trait LibrarySource {
    async fn fetch(&self, library_url: &str) -> Result<ScanResult, AppError>;
}

/// Transforms a scan result into display state.
pub trait ResultComposer {
    fn compose(&self, result: &ScanResult) -> DisplayModel;
}

/// Delivers a rendered report to its destinations.
pub trait ReportDelivery {
    fn deliver(&self, report: RenderedReport) -> Result<OutputReport, AppError>;
}
