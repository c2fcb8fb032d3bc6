//! Catalog collaborator — HTTP client for the public show API.
//!
//! DESIGN
//! ======
//! Thin reqwest wrapper over the two endpoints the app consumes, with pure
//! response parsing in `parse_records` for testability. The preference
//! core never calls this module; catalog data only reaches the store when
//! a caller builds a `FavoriteItem` from a record and toggles it.

pub mod types;

use std::time::Duration;

pub use types::{CatalogImage, CatalogItem, CatalogRecord, strip_markup};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.tvmaze.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Category name that maps to the full listing instead of a search.
pub const TRENDING_CATEGORY: &str = "trending";

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced by catalog client operations. These never reach the
/// store; callers report them and move on.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request could not be sent or completed.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The catalog returned a non-success HTTP status.
    #[error("catalog response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("catalog response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CONFIG
// =============================================================================

/// Catalog client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl CatalogConfig {
    /// Build typed catalog config from environment variables.
    ///
    /// Optional:
    /// - `CATALOG_BASE_URL`: default `https://api.tvmaze.com`
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CATALOG_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string()),
            request_timeout_secs: env_parse("CATALOG_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse("CATALOG_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client for the catalog collaborator.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::HttpClientBuild`] if the HTTP client fails
    /// to construct.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_config(CatalogConfig::from_env())
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::HttpClientBuild`] if the HTTP client fails
    /// to construct.
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| CatalogError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Fetch the full show listing.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the request fails, the status is
    /// non-success, or the body does not parse.
    pub async fn list_all(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        execute(self.http.get(format!("{}/shows", self.base_url))).await
    }

    /// Search shows by free-text query.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the request fails, the status is
    /// non-success, or the body does not parse.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let request = self
            .http
            .get(format!("{}/search/shows", self.base_url))
            .query(&[("q", query)]);
        execute(request).await
    }

    /// Load a category view: the trending category maps to the full
    /// listing, anything else runs through search.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the request fails, the status is
    /// non-success, or the body does not parse.
    pub async fn list_category(&self, category: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        if category == TRENDING_CATEGORY {
            self.list_all().await
        } else {
            self.search(category).await
        }
    }
}

async fn execute(request: reqwest::RequestBuilder) -> Result<Vec<CatalogItem>, CatalogError> {
    let response = request
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(CatalogError::Response { status, body });
    }

    parse_records(&body)
}

/// Parse a provider response body into normalized catalog items.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when the body is not a list of records
/// in either the wrapped or the direct shape.
pub fn parse_records(body: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
    Ok(records.into_iter().map(CatalogRecord::into_item).collect())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
