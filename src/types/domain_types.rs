//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use crate::constants::{DEFAULT_SITE_DEPTH, MAX_SITE_DEPTH};
use std::fmt;

/// Number of leading path segments that identify the owning site.
///
/// This is a deployment convention, not something the URL itself tells us:
/// `/sites/A/B/Docs` has a three-segment site (`/sites/A/B`) only because
/// the farm nests subsites exactly two levels below `/sites`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteDepth(usize);

impl SiteDepth {
    pub fn new(depth: usize) -> Result<Self, ValidationError> {
        if depth == 0 || depth > MAX_SITE_DEPTH {
            return Err(ValidationError::OutOfBounds {
                value: depth,
                min: 1,
                max: MAX_SITE_DEPTH,
            });
        }
        Ok(Self(depth))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SiteDepth {
    fn default() -> Self {
        Self(DEFAULT_SITE_DEPTH)
    }
}

impl fmt::Display for SiteDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ambient session credentials, sent verbatim as the `Cookie` header.
#[derive(Clone, PartialEq, Eq)]
pub struct CookieHeader(String);

impl CookieHeader {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::EmptyField("cookie"));
        }

        if value.chars().any(|c| c == '\r' || c == '\n') {
            return Err(ValidationError::InvalidCookie {
                reason: "header value cannot contain line breaks".to_string(),
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Session cookies never end up in logs.
impl fmt::Debug for CookieHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CookieHeader(<{} bytes>)", self.0.len())
    }
}

/// The final presented report, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport(String);

impl RenderedReport {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
