// src/api/client.rs
//! Thin HTTP client wrapper for the platform's REST API.
//!
//! This module wraps reqwest for making GET requests. It attaches the
//! ambient session credentials and basic request options, without any
//! parsing or business logic.

use super::HttpClient;
use crate::error::AppError;
use crate::types::CookieHeader;
use reqwest::{header, Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Options for building a [`ReqwestHttpClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Session cookie forwarded on every request
    pub cookie: Option<CookieHeader>,
    /// Whole-request timeout; `None` leaves reqwest's default (no timeout)
    pub timeout: Option<Duration>,
}

/// A thin wrapper around reqwest Client carrying ambient credentials.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client from the given options.
    pub fn new(options: &ClientOptions) -> Result<Self, AppError> {
        let mut builder = Client::builder().default_headers(Self::create_headers(options)?);

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Creates the default headers sent with every request.
    fn create_headers(options: &ClientOptions) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        if let Some(cookie) = &options.cookie {
            let mut value = header::HeaderValue::from_str(cookie.as_str()).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid cookie header: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(header::COOKIE, value);
        }

        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("spscan/", env!("CARGO_PKG_VERSION"))),
        );

        Ok(headers)
    }

    /// Makes a GET request to an absolute URL.
    pub async fn get(&self, url: &str, headers: &header::HeaderMap) -> Result<Response, AppError> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).headers(headers.clone()).send().await?;

        log::debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_json(&self, url: &str, headers: &header::HeaderMap) -> Result<Value, AppError> {
        let response = self.get(url, headers).await?;
        let result = extract_response_text(url, response).await?;
        super::parser::parse_json_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    /// The URL as requested, before any redirects
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(
    url: &str,
    response: Response,
) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url: url.to_string(),
    })
}
