// src/lib.rs
//! spscan library — lists the documents of a SharePoint document library.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `HttpStatusCode`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `ScanConfig`
//! - **URL resolution** — `resolve`, `ResolvedLocation`, `SiteDepth`
//! - **API client** — `HttpClient`, `ReqwestHttpClient`, `LibraryClient`
//! - **Formatting** — `render_results`, `DisplayModel`, `Presenter`
//! - **Scanning** — `LibraryScanner`, pipeline traits

pub mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod resolver;
mod scan;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, HttpStatusCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ScanConfig};
pub use crate::constants::{
    DEFAULT_SITE_DEPTH, ERROR_BODY_PREVIEW_LENGTH, LIBRARY_ITEM_PAGE_CAP, ODATA_VERBOSE_ACCEPT,
    SCAN_FAILED_EXIT_CODE,
};

// --- Domain Model ---
pub use crate::model::{LibraryItem, LibraryMetadata, ModifiedTime, ScanResult};

// --- Domain Types ---
pub use crate::types::{CookieHeader, ListId, RenderedReport, ResolvedLocation, SiteDepth};

// --- URL Resolution ---
pub use crate::resolver::resolve;

// --- API Client ---
pub use crate::api::{ClientOptions, HttpClient, LibraryClient, ReqwestHttpClient};

// --- Formatting ---
pub use crate::formatting::{
    escape_html, render_failure, render_results, DisplayModel, DisplayRow, HtmlPresenter,
    OutputFormat, Presenter, ResultsBody, StatusLevel, StatusLine, TextPresenter, TimeDisplay,
};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};

// --- Pipeline ---
pub use crate::pipeline::{LibrarySource, ReportDelivery, ResultComposer};
pub use crate::scan::LibraryScanner;
