//! reqwest-backed listing fetcher
//!
//! Issues the read-only GET against the listing path with the reconciled
//! query and decodes the refresh envelope.

use async_trait::async_trait;
use reqwest::Url;
use toolbar_application::{FetchError, ListingFetcher, RefreshRequest};
use toolbar_domain::RefreshResponse;
use tracing::debug;

/// Marks the request as asynchronous for storefronts that branch on it.
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// [`ListingFetcher`] over HTTP.
///
/// Relative listing paths (`/catalog/shoes`) are resolved against `origin`;
/// absolute URLs are used as given.
pub struct ReqwestListingFetcher {
    client: reqwest::Client,
    origin: Option<Url>,
}

impl ReqwestListingFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Absolute request URL for `request`.
    pub fn resolve_url(&self, request: &RefreshRequest) -> Result<Url, FetchError> {
        let mut url = match Url::parse(&request.path) {
            Ok(url) => url,
            Err(_) => {
                let origin = self.origin.as_ref().ok_or_else(|| {
                    FetchError::Transport(format!(
                        "relative path '{}' without an origin",
                        request.path
                    ))
                })?;
                origin
                    .join(&request.path)
                    .map_err(|e| FetchError::Transport(e.to_string()))?
            }
        };
        url.set_query(Some(&request.query));
        Ok(url)
    }
}

#[async_trait]
impl ListingFetcher for ReqwestListingFetcher {
    async fn fetch(&self, request: &RefreshRequest) -> Result<RefreshResponse, FetchError> {
        let url = self.resolve_url(request)?;
        debug!(%url, "fetching listing fragment");

        let mut builder = self
            .client
            .get(url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(map_transport)?;
        serde_json::from_str::<RefreshResponse>(&body)
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

fn map_transport(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}
