// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you how a scan
//! addresses a library and how much of it comes back.

// ---------------------------------------------------------------------------
// Site addressing
// ---------------------------------------------------------------------------

/// How many leading path segments identify the owning site.
///
/// Deployments this tool was written for always nest sites two levels deep
/// under a managed path: `/sites/<collection>/<subsite>/<Library>/...`.
pub const DEFAULT_SITE_DEPTH: usize = 3;

/// Upper bound accepted for a configured site depth.
pub const MAX_SITE_DEPTH: usize = 16;

// ---------------------------------------------------------------------------
// REST API boundaries
// ---------------------------------------------------------------------------

/// Maximum number of items requested in the single listing call.
///
/// The platform refuses larger `$top` values on unindexed lists, and the
/// scan deliberately never pages past this.
pub const LIBRARY_ITEM_PAGE_CAP: usize = 5000;

/// Accept header asking for the verbose OData JSON envelope (`{"d": ...}`).
pub const ODATA_VERBOSE_ACCEPT: &str = "application/json;odata=verbose";

/// Field projection for the item listing.
pub const ITEM_SELECT_FIELDS: &str = "Id,Title,FileLeafRef,FileRef,Modified,Editor/Title";

/// Relations expanded one level in the item listing.
pub const ITEM_EXPAND_FIELDS: &str = "Editor";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Display format for an item's modification time.
pub const MODIFIED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable consulted for ambient session credentials.
pub const COOKIE_ENV_VAR: &str = "SPSCAN_COOKIE";

/// Exit status after a failed scan's report has been delivered. Setup and
/// delivery errors exit with 1.
pub const SCAN_FAILED_EXIT_CODE: u8 = 2;
