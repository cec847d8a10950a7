//! Toolbar widget options.
//!
//! [`ToolbarOptions`] is the initialization payload the widget consumes at
//! construction. It is serialized with camelCase keys so the same JSON can
//! be embedded into the storefront page.

use crate::control::ControlRole;
use crate::scroll::Easing;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// CSS selectors for each control role and for the replaceable regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSelectors {
    pub mode_switch: String,
    pub direction_switch: String,
    pub sort_switch: String,
    pub page_size_switch: String,
    pub pager: String,
    pub content_container: String,
    pub sidebar_container: String,
}

impl Default for ControlSelectors {
    fn default() -> Self {
        Self {
            mode_switch: r#"[data-role="mode-switcher"]"#.to_string(),
            direction_switch: r#"[data-role="direction-switcher"]"#.to_string(),
            sort_switch: r#"[data-role="sorter"]"#.to_string(),
            page_size_switch: r#"[data-role="limiter"]"#.to_string(),
            pager: r#"[data-role="pager"]"#.to_string(),
            content_container: ".column.main".to_string(),
            sidebar_container: ".sidebar-main".to_string(),
        }
    }
}

impl ControlSelectors {
    pub fn for_role(&self, role: ControlRole) -> &str {
        match role {
            ControlRole::Mode => &self.mode_switch,
            ControlRole::Direction => &self.direction_switch,
            ControlRole::Order => &self.sort_switch,
            ControlRole::Limit => &self.page_size_switch,
            ControlRole::Pager => &self.pager,
        }
    }
}

/// One string per control role. Used for parameter names and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleValues {
    pub mode: String,
    pub direction: String,
    pub order: String,
    pub limit: String,
    pub pager: String,
}

impl RoleValues {
    /// Query parameter names the catalog understands.
    pub fn param_names() -> Self {
        Self {
            mode: "product_list_mode".to_string(),
            direction: "product_list_dir".to_string(),
            order: "product_list_order".to_string(),
            limit: "product_list_limit".to_string(),
            pager: "p".to_string(),
        }
    }

    /// Values the catalog assumes when a parameter is absent.
    pub fn default_values() -> Self {
        Self {
            mode: "grid".to_string(),
            direction: "asc".to_string(),
            order: "position".to_string(),
            limit: "9".to_string(),
            pager: "1".to_string(),
        }
    }

    pub fn get(&self, role: ControlRole) -> &str {
        match role {
            ControlRole::Mode => &self.mode,
            ControlRole::Direction => &self.direction,
            ControlRole::Order => &self.order,
            ControlRole::Limit => &self.limit,
            ControlRole::Pager => &self.pager,
        }
    }
}

/// Immutable widget configuration.
///
/// Built once per page from resolver output plus caller overrides, then
/// read-only for the widget's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolbarOptions {
    pub async_enabled: bool,
    /// Milliseconds; zero or negative disables the client-side timeout
    pub request_timeout_ms: i64,
    pub scroll_enabled: bool,
    pub scroll_easing: String,
    pub scroll_duration_ms: i64,
    pub scroll_offset_px: i64,
    /// Base URL the widget reconciles against (path plus optional query)
    pub url: String,
    pub selectors: ControlSelectors,
    pub params: RoleValues,
    pub defaults: RoleValues,
    /// Drop responses that belong to an interaction older than the latest one
    pub discard_superseded_responses: bool,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            async_enabled: false,
            request_timeout_ms: 10_000,
            scroll_enabled: true,
            scroll_easing: Easing::Swing.as_str().to_string(),
            scroll_duration_ms: 1_200,
            scroll_offset_px: 20,
            url: String::new(),
            selectors: ControlSelectors::default(),
            params: RoleValues::param_names(),
            defaults: RoleValues::default_values(),
            discard_superseded_responses: false,
        }
    }
}

impl ToolbarOptions {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_async_enabled(mut self, enabled: bool) -> Self {
        self.async_enabled = enabled;
        self
    }

    pub fn with_scroll_enabled(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms as u64))
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms.max(0) as u64)
    }

    pub fn easing(&self) -> Easing {
        Easing::from_name(&self.scroll_easing)
    }

    pub fn param_for(&self, role: ControlRole) -> &str {
        self.params.get(role)
    }

    pub fn default_for(&self, role: ControlRole) -> &str {
        self.defaults.get(role)
    }

    pub fn from_json(json: &str) -> Result<Self, crate::core::error::DomainError> {
        serde_json::from_str(json)
            .map_err(|e| crate::core::error::DomainError::InvalidOptions(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ToolbarOptions::default();
        assert!(!options.async_enabled);
        assert_eq!(options.request_timeout(), Some(Duration::from_millis(10_000)));
        assert_eq!(options.easing(), Easing::Swing);
        assert_eq!(options.param_for(ControlRole::Limit), "product_list_limit");
        assert_eq!(options.default_for(ControlRole::Limit), "9");
        assert_eq!(
            options.selectors.for_role(ControlRole::Order),
            r#"[data-role="sorter"]"#
        );
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let options = ToolbarOptions {
            request_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(options.request_timeout(), None);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(ToolbarOptions::default()).unwrap();
        assert_eq!(json["asyncEnabled"], false);
        assert_eq!(json["requestTimeoutMs"], 10_000);
        assert_eq!(json["selectors"]["contentContainer"], ".column.main");
        assert_eq!(json["defaults"]["order"], "position");
    }

    #[test]
    fn test_deserialize_partial_payload_uses_defaults() {
        let options =
            ToolbarOptions::from_json(r#"{"asyncEnabled":true,"url":"/catalog"}"#).unwrap();
        assert!(options.async_enabled);
        assert_eq!(options.url, "/catalog");
        assert_eq!(options.scroll_offset_px, 20);
    }

    #[test]
    fn test_invalid_payload() {
        assert!(ToolbarOptions::from_json("[]").is_err());
    }
}
