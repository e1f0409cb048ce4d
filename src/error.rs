// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names the stage of a scan that failed and carries
//! what a user needs to see to understand why.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use std::fmt;
use thiserror::Error;

/// HTTP failure classes as a typed vocabulary.
///
/// The REST API answers failures with HTML or plain-text pages as often as
/// with JSON, so the status code is the only reliable signal. Classifying it
/// lets callers attach a hint without matching on raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatusCode {
    /// Session credentials are missing or expired
    Unauthorized,
    /// Authenticated, but not allowed to read the site or library
    Forbidden,
    /// The site or library path does not exist
    NotFound,
    /// The farm is throttling requests
    Throttled,
    /// Server-side failure
    ServerError(u16),
    /// Anything else
    Other(u16),
}

impl HttpStatusCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::Throttled,
            500..=599 => Self::ServerError(status),
            other => Self::Other(other),
        }
    }

    /// A short hint for the log, if the class suggests a likely cause.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized => {
                Some("session credentials were rejected; pass a fresh cookie with --cookie")
            }
            Self::Forbidden => Some("the session has no read access to this site or library"),
            Self::NotFound => Some("check the site depth; the derived site or library may be wrong"),
            Self::Throttled => Some("the server is throttling requests; try again later"),
            Self::ServerError(_) | Self::Other(_) => None,
        }
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::Throttled => write!(f, "throttled"),
            Self::ServerError(code) => write!(f, "server_error_{}", code),
            Self::Other(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Could not find a library name in {url}: expected at least {} path segments", depth + 1)]
    LibraryNameMissing { url: String, depth: usize },

    #[error("HTTP {status} from {url}\n{body_excerpt}")]
    Http {
        status: u16,
        url: String,
        body_excerpt: String,
    },

    #[error("Could not read a list Id for library {library_path}")]
    MetadataMissing { library_path: String },

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },
}

impl AppError {
    /// Builds an [`AppError::Http`] from a failed response body, keeping at
    /// most [`ERROR_BODY_PREVIEW_LENGTH`] characters of it.
    pub fn http(status: u16, url: impl Into<String>, body: &str) -> Self {
        AppError::Http {
            status,
            url: url.into(),
            body_excerpt: body_excerpt(body),
        }
    }

    /// The HTTP failure class, for errors that came from a response status.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            AppError::Http { status, .. } => Some(HttpStatusCode::from_status(*status)),
            AppError::NetworkFailure(e) => e.status().map(|s| HttpStatusCode::from_status(s.as_u16())),
            _ => None,
        }
    }
}

/// Truncates a response body to the preview length, on a char boundary.
pub fn body_excerpt(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect()
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
