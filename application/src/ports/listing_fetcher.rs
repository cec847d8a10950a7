//! Listing fetcher port
//!
//! Defines how the widget asks the storefront for a re-rendered listing.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use toolbar_domain::RefreshResponse;

/// Errors that can occur while fetching a listing fragment.
///
/// Every variant is surfaced to the visitor the same way (a generic alert);
/// the detail is for diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// A read-only listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Base path (or absolute URL) of the listing
    pub path: String,
    /// Reconciled query including the asynchronous marker
    pub query: String,
    /// `None` leaves timing to the transport
    pub timeout: Option<Duration>,
}

impl RefreshRequest {
    pub fn url(&self) -> String {
        format!("{}?{}", self.path, self.query)
    }
}

/// Gateway to the listing refresh endpoint.
#[async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch(&self, request: &RefreshRequest) -> Result<RefreshResponse, FetchError>;
}
