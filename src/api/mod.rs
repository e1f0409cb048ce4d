//! REST API interaction — the ability to read a document library.
//!
//! This module keeps I/O, URL construction and parsing apart. Business
//! logic depends on the [`HttpClient`] capability, never on reqwest.

pub mod client;
pub mod endpoints;
mod library_client;
pub mod parser;
mod responses;

use crate::error::AppError;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// The ability to GET a JSON document with the caller's ambient credentials.
///
/// Implementations report a non-success status as [`AppError::Http`] and a
/// body that is not JSON as [`AppError::MalformedResponse`].
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_json(&self, url: &str, headers: &HeaderMap) -> Result<Value, AppError>;
}

#[async_trait::async_trait]
impl<'a, T: HttpClient + ?Sized> HttpClient for &'a T {
    async fn get_json(&self, url: &str, headers: &HeaderMap) -> Result<Value, AppError> {
        (**self).get_json(url, headers).await
    }
}

#[async_trait::async_trait]
impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    async fn get_json(&self, url: &str, headers: &HeaderMap) -> Result<Value, AppError> {
        (**self).get_json(url, headers).await
    }
}

// Re-export the public interface
pub use client::{ClientOptions, ReqwestHttpClient};
pub use library_client::LibraryClient;
