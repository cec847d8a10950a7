//! Post-refresh choreography: scroll first, then swap regions.

use super::ToolbarWidget;
use super::types::RegionUpdate;
use toolbar_domain::{CONTENT_UPDATED_EVENT, RefreshResult};
use tracing::debug;

impl ToolbarWidget {
    /// Scroll to the first content container when enabled. Resolves once
    /// the animation has completed.
    pub(super) async fn scroll_to_listing(&self) {
        if !self.options.scroll_enabled {
            return;
        }
        let dom = &self.ports.dom;
        let first = dom
            .query_all(&self.options.selectors.content_container)
            .into_iter()
            .next();
        if let Some(container) = first
            && let Some(top) = dom.offset_top(container)
        {
            let target = top.saturating_sub(self.options.scroll_offset_px);
            debug!(target, easing = %self.options.easing(), "scrolling to listing");
            self.ports
                .scroll
                .animate_to(target, self.options.scroll_duration(), self.options.easing())
                .await;
        }
    }

    /// Replace the main content and sidebar regions present in `result`.
    pub(super) fn update_content(&self, result: &RefreshResult) -> RegionUpdate {
        let dom = &self.ports.dom;
        let mut regions = RegionUpdate::default();

        if let Some(content) = &result.content {
            let containers = dom.query_all(&self.options.selectors.content_container);
            if let Some((first, duplicates)) = containers.split_first() {
                for duplicate in duplicates {
                    dom.remove(*duplicate);
                }
                dom.set_inner_html(*first, content);
                dom.dispatch(*first, CONTENT_UPDATED_EVENT);
                regions.content = true;
            }
        }

        if let Some(sidebar) = &result.sidebar {
            for container in dom.query_all(&self.options.selectors.sidebar_container) {
                dom.empty(container);
                dom.set_inner_html(container, sidebar);
                dom.dispatch(container, CONTENT_UPDATED_EVENT);
                regions.sidebar = true;
            }
        }

        regions
    }
}
