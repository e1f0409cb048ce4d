// src/resolver.rs
//! Derives the owning site and the library path from a library URL.
//!
//! This is a positional convention, not a semantic parse: the first
//! `depth` path segments are the site, the next one is the library's
//! internal name, and whatever follows (`Forms/AllItems.aspx`, folder
//! paths, ...) is ignored.

use crate::error::AppError;
use crate::types::{ResolvedLocation, SiteDepth};
use url::Url;

/// Resolves a library URL into its site URL and server-relative library path.
pub fn resolve(input: &str, depth: SiteDepth) -> Result<ResolvedLocation, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::InvalidUrl {
            url: String::new(),
            reason: "URL is empty".to_string(),
        });
    }

    let url = Url::parse(input).map_err(|e| AppError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(AppError::InvalidUrl {
            url: input.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let depth = depth.get();
    let library_name = segments
        .get(depth)
        .ok_or_else(|| AppError::LibraryNameMissing {
            url: input.to_string(),
            depth,
        })?;

    let site_path = segments[..depth].join("/");
    let origin = url.origin().ascii_serialization();
    let site_url = format!("{}/{}", origin, site_path);
    let library_path = format!("/{}/{}", site_path, library_name);

    log::debug!("Resolved {} -> site {}, library {}", input, site_url, library_path);

    Ok(ResolvedLocation::new(site_url, library_path))
}
