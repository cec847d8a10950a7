//! Caller-supplied partial options.
//!
//! A hosting template may override any subset of [`ToolbarOptions`]. The
//! merge is explicit and field-by-field: a present override wins, an absent
//! one keeps the base value, and nested groups merge per key so replacing
//! one selector leaves the rest intact.
//!
//! `asyncEnabled` is the one asymmetric field: an override can switch
//! asynchronous mode off but never back on.

use super::toolbar_options::{ControlSelectors, RoleValues, ToolbarOptions};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlSelectorOverrides {
    pub mode_switch: Option<String>,
    pub direction_switch: Option<String>,
    pub sort_switch: Option<String>,
    pub page_size_switch: Option<String>,
    pub pager: Option<String>,
    pub content_container: Option<String>,
    pub sidebar_container: Option<String>,
}

impl ControlSelectorOverrides {
    fn apply(&self, base: &mut ControlSelectors) {
        override_with(&mut base.mode_switch, &self.mode_switch);
        override_with(&mut base.direction_switch, &self.direction_switch);
        override_with(&mut base.sort_switch, &self.sort_switch);
        override_with(&mut base.page_size_switch, &self.page_size_switch);
        override_with(&mut base.pager, &self.pager);
        override_with(&mut base.content_container, &self.content_container);
        override_with(&mut base.sidebar_container, &self.sidebar_container);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleValueOverrides {
    pub mode: Option<String>,
    pub direction: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub pager: Option<String>,
}

impl RoleValueOverrides {
    fn apply(&self, base: &mut RoleValues) {
        override_with(&mut base.mode, &self.mode);
        override_with(&mut base.direction, &self.direction);
        override_with(&mut base.order, &self.order);
        override_with(&mut base.limit, &self.limit);
        override_with(&mut base.pager, &self.pager);
    }
}

/// Partial [`ToolbarOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolbarOverrides {
    pub async_enabled: Option<bool>,
    pub request_timeout_ms: Option<i64>,
    pub scroll_enabled: Option<bool>,
    pub scroll_easing: Option<String>,
    pub scroll_duration_ms: Option<i64>,
    pub scroll_offset_px: Option<i64>,
    pub url: Option<String>,
    pub selectors: ControlSelectorOverrides,
    pub params: RoleValueOverrides,
    pub defaults: RoleValueOverrides,
    pub discard_superseded_responses: Option<bool>,
}

impl ToolbarOverrides {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidOptions(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn override_with<T: Clone>(base: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *base = v.clone();
    }
}

impl ToolbarOptions {
    /// Merge caller overrides onto these options.
    pub fn merge(mut self, overrides: &ToolbarOverrides) -> Self {
        self.async_enabled = self.async_enabled && overrides.async_enabled.unwrap_or(true);
        override_with(&mut self.request_timeout_ms, &overrides.request_timeout_ms);
        override_with(&mut self.scroll_enabled, &overrides.scroll_enabled);
        override_with(&mut self.scroll_easing, &overrides.scroll_easing);
        override_with(&mut self.scroll_duration_ms, &overrides.scroll_duration_ms);
        override_with(&mut self.scroll_offset_px, &overrides.scroll_offset_px);
        override_with(&mut self.url, &overrides.url);
        overrides.selectors.apply(&mut self.selectors);
        overrides.params.apply(&mut self.params);
        overrides.defaults.apply(&mut self.defaults);
        override_with(
            &mut self.discard_superseded_responses,
            &overrides.discard_superseded_responses,
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_are_identity() {
        let base = ToolbarOptions::default().with_async_enabled(true);
        assert_eq!(base.clone().merge(&ToolbarOverrides::default()), base);
        assert!(ToolbarOverrides::default().is_empty());
    }

    #[test]
    fn test_single_selector_override_keeps_others() {
        let overrides =
            ToolbarOverrides::from_json(r##"{"selectors":{"contentContainer":"#maincontent"}}"##)
                .unwrap();
        let merged = ToolbarOptions::default().merge(&overrides);
        assert_eq!(merged.selectors.content_container, "#maincontent");
        assert_eq!(merged.selectors.sidebar_container, ".sidebar-main");
        assert_eq!(merged.selectors.pager, r#"[data-role="pager"]"#);
    }

    #[test]
    fn test_scalar_overrides_win() {
        let overrides = ToolbarOverrides {
            request_timeout_ms: Some(3_000),
            scroll_easing: Some("linear".to_string()),
            url: Some("/sale.html?cat=4".to_string()),
            ..Default::default()
        };
        let merged = ToolbarOptions::default().merge(&overrides);
        assert_eq!(merged.request_timeout_ms, 3_000);
        assert_eq!(merged.scroll_easing, "linear");
        assert_eq!(merged.url, "/sale.html?cat=4");
    }

    #[test]
    fn test_override_cannot_enable_async() {
        let overrides = ToolbarOverrides {
            async_enabled: Some(true),
            ..Default::default()
        };
        let merged = ToolbarOptions::default()
            .with_async_enabled(false)
            .merge(&overrides);
        assert!(!merged.async_enabled);
    }

    #[test]
    fn test_override_can_disable_async() {
        let overrides = ToolbarOverrides {
            async_enabled: Some(false),
            ..Default::default()
        };
        let merged = ToolbarOptions::default()
            .with_async_enabled(true)
            .merge(&overrides);
        assert!(!merged.async_enabled);
    }

    #[test]
    fn test_default_value_override() {
        let overrides = ToolbarOverrides::from_json(r#"{"defaults":{"limit":"12"}}"#).unwrap();
        let merged = ToolbarOptions::default().merge(&overrides);
        assert_eq!(merged.defaults.limit, "12");
        assert_eq!(merged.defaults.order, "position");
    }
}
