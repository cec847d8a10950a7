//! Asynchronous refresh and synchronous navigation.

use super::types::InteractionOutcome;
use super::{GENERIC_ERROR_MESSAGE, ToolbarWidget};
use crate::ports::listing_fetcher::{FetchError, RefreshRequest};
use crate::ports::loader::LoadingIndicator;
use std::sync::atomic::Ordering;
use toolbar_domain::{BaseUrl, ControlBinding};
use tracing::{debug, info, warn};

impl ToolbarWidget {
    pub(super) async fn refresh(&self, binding: &ControlBinding, value: &str) -> InteractionOutcome {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let reconciled =
            BaseUrl::parse(&self.options.url).reconcile(&binding.param, value, &binding.default_value);
        let request = RefreshRequest {
            path: reconciled.path().to_string(),
            query: reconciled.async_query(),
            timeout: self.options.request_timeout(),
        };
        debug!(sequence, url = %request.url(), "requesting listing refresh");

        let response = {
            let _loader = Loading::show(self.ports.loader.as_ref());
            self.ports.fetcher.fetch(&request).await
        };

        if self.superseded(sequence) {
            return InteractionOutcome::Superseded { sequence };
        }

        let result = match response.and_then(|r| {
            r.into_result()
                .map_err(|e| FetchError::Malformed(e.to_string()))
        }) {
            Ok(result) => result,
            Err(error) => {
                warn!(url = %request.url(), error = %error, "listing refresh failed");
                self.ports
                    .alert
                    .alert(&self.ports.translator.translate(GENERIC_ERROR_MESSAGE));
                return InteractionOutcome::Failed { error };
            }
        };

        if !result.success {
            if let Some(message) = &result.error_message {
                self.ports
                    .alert
                    .alert(&self.ports.translator.translate(message));
            }
            info!(message = ?result.error_message, "listing refresh rejected");
            return InteractionOutcome::Rejected {
                message: result.error_message,
            };
        }

        let url = reconciled.url();
        if self.options.discard_superseded_responses {
            // a newer response may land while this one is scrolling
            self.scroll_to_listing().await;
            if self.superseded(sequence) {
                return InteractionOutcome::Superseded { sequence };
            }
            self.replace_browser_url(reconciled.path(), &url);
        } else {
            self.replace_browser_url(reconciled.path(), &url);
            self.scroll_to_listing().await;
        }
        let regions = self.update_content(&result);
        info!(%url, content = regions.content, sidebar = regions.sidebar, "listing refreshed");
        InteractionOutcome::Applied { url, regions }
    }

    pub(super) fn navigate(&self, binding: &ControlBinding, value: &str) -> InteractionOutcome {
        let url = BaseUrl::parse(&self.options.url)
            .reconcile(&binding.param, value, &binding.default_value)
            .url();
        info!(%url, "navigating to reconciled listing");
        self.ports.browser.navigate(&url);
        InteractionOutcome::Navigated { url }
    }

    /// Whether a newer interaction was issued after `sequence`. Always
    /// false unless superseded responses are discarded.
    fn superseded(&self, sequence: u64) -> bool {
        if !self.options.discard_superseded_responses {
            return false;
        }
        let latest = self.sequence.load(Ordering::SeqCst);
        if sequence < latest {
            debug!(sequence, latest, "discarding superseded refresh response");
            return true;
        }
        false
    }

    fn replace_browser_url(&self, path: &str, url: &str) {
        if path.is_empty() || !self.ports.browser.supports_history_replace() {
            return;
        }
        self.ports.browser.replace_url(url);
    }
}

/// Keeps the loading indicator up until dropped.
struct Loading<'a>(&'a dyn LoadingIndicator);

impl<'a> Loading<'a> {
    fn show(loader: &'a dyn LoadingIndicator) -> Self {
        loader.show();
        Self(loader)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.0.hide();
    }
}
