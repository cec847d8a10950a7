//! Resolve toolbar widget options from store configuration.
//!
//! [`ConfigResolver`] decides per store whether the toolbar loads listing
//! changes asynchronously and, if so, which timeout and scroll tunables the
//! widget receives. Template overrides are layered on top.
//!
//! Incomplete configuration never fails: a missing or malformed value reads
//! as disabled / zero, so the storefront falls back to ordinary navigation.

use crate::ports::store_config::{StoreCode, StoreConfigPort};
use std::sync::Arc;
use toolbar_domain::config::config_path::{
    AJAX_REQUEST_TIMEOUT, ENABLED, SCROLL_TO_TOP_DURATION, SCROLL_TO_TOP_EASING,
    SCROLL_TO_TOP_ENABLED, SCROLL_TO_TOP_OFFSET,
};
use toolbar_domain::config::{coerce_flag, coerce_int};
use toolbar_domain::{AsyncSettings, AsyncTunables, ToolbarOptions, ToolbarOverrides};
use tracing::debug;

pub struct ConfigResolver {
    config: Arc<dyn StoreConfigPort>,
}

impl ConfigResolver {
    pub fn new(config: Arc<dyn StoreConfigPort>) -> Self {
        Self { config }
    }

    /// Read the feature toggle and, when on, every tunable.
    pub fn resolve(&self, store: &StoreCode) -> AsyncSettings {
        if !self.flag(ENABLED, store) {
            debug!(store = %store, "asynchronous toolbar disabled");
            return AsyncSettings::Disabled;
        }

        let tunables = AsyncTunables {
            request_timeout_ms: self.int(AJAX_REQUEST_TIMEOUT, store),
            scroll_enabled: self.flag(SCROLL_TO_TOP_ENABLED, store),
            scroll_easing: self
                .config
                .value(SCROLL_TO_TOP_EASING, store)
                .unwrap_or_default(),
            scroll_duration_ms: self.int(SCROLL_TO_TOP_DURATION, store),
            scroll_offset_px: self.int(SCROLL_TO_TOP_OFFSET, store),
        };
        debug!(store = %store, ?tunables, "asynchronous toolbar enabled");
        AsyncSettings::Enabled(tunables)
    }

    /// Full widget options: built-in defaults, then resolver output, then
    /// caller overrides.
    pub fn widget_options(&self, store: &StoreCode, overrides: &ToolbarOverrides) -> ToolbarOptions {
        self.resolve(store)
            .apply_to(ToolbarOptions::default())
            .merge(overrides)
    }

    /// Widget options serialized as the page initialization payload.
    pub fn widget_options_json(
        &self,
        store: &StoreCode,
        overrides: &ToolbarOverrides,
    ) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.widget_options(store, overrides))
    }

    fn flag(&self, path: &str, store: &StoreCode) -> bool {
        coerce_flag(self.config.value(path, store).as_deref())
    }

    fn int(&self, path: &str, store: &StoreCode) -> i64 {
        coerce_int(self.config.value(path, store).as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapConfig {
        values: HashMap<&'static str, &'static str>,
    }

    impl MapConfig {
        fn new(values: &[(&'static str, &'static str)]) -> Arc<Self> {
            Arc::new(Self {
                values: values.iter().copied().collect(),
            })
        }
    }

    impl StoreConfigPort for MapConfig {
        fn value(&self, path: &str, _store: &StoreCode) -> Option<String> {
            self.values.get(path).map(|v| v.to_string())
        }
    }

    fn enabled_config() -> Arc<MapConfig> {
        MapConfig::new(&[
            (ENABLED, "1"),
            (AJAX_REQUEST_TIMEOUT, "8000"),
            (SCROLL_TO_TOP_ENABLED, "1"),
            (SCROLL_TO_TOP_EASING, "linear"),
            (SCROLL_TO_TOP_DURATION, "600"),
            (SCROLL_TO_TOP_OFFSET, "40"),
        ])
    }

    #[test]
    fn test_disabled_when_toggle_missing() {
        let resolver = ConfigResolver::new(MapConfig::new(&[(AJAX_REQUEST_TIMEOUT, "8000")]));
        assert_eq!(resolver.resolve(&StoreCode::default()), AsyncSettings::Disabled);
    }

    #[test]
    fn test_enabled_reads_all_tunables() {
        let resolver = ConfigResolver::new(enabled_config());
        let settings = resolver.resolve(&StoreCode::default());
        assert_eq!(
            settings,
            AsyncSettings::Enabled(AsyncTunables {
                request_timeout_ms: 8000,
                scroll_enabled: true,
                scroll_easing: "linear".to_string(),
                scroll_duration_ms: 600,
                scroll_offset_px: 40,
            })
        );
    }

    #[test]
    fn test_malformed_values_resolve_to_zero() {
        let resolver = ConfigResolver::new(MapConfig::new(&[
            (ENABLED, "1"),
            (AJAX_REQUEST_TIMEOUT, "soon"),
            (SCROLL_TO_TOP_ENABLED, "0"),
        ]));
        let options = resolver.widget_options(&StoreCode::default(), &ToolbarOverrides::default());
        assert!(options.async_enabled);
        assert_eq!(options.request_timeout_ms, 0);
        assert_eq!(options.request_timeout(), None);
        assert!(!options.scroll_enabled);
        assert_eq!(options.scroll_easing, "");
        assert_eq!(options.scroll_duration_ms, 0);
    }

    #[test]
    fn test_overrides_win_per_key() {
        let resolver = ConfigResolver::new(enabled_config());
        let overrides = ToolbarOverrides::from_json(
            r#"{"requestTimeoutMs":2500,"selectors":{"sidebarContainer":".sidebar"}}"#,
        )
        .unwrap();
        let options = resolver.widget_options(&StoreCode::default(), &overrides);
        assert_eq!(options.request_timeout_ms, 2500);
        assert_eq!(options.scroll_offset_px, 40);
        assert_eq!(options.selectors.sidebar_container, ".sidebar");
        assert_eq!(options.selectors.content_container, ".column.main");
    }

    #[test]
    fn test_override_cannot_reenable_disabled_store() {
        let resolver = ConfigResolver::new(MapConfig::new(&[]));
        let overrides = ToolbarOverrides::from_json(r#"{"asyncEnabled":true}"#).unwrap();
        let options = resolver.widget_options(&StoreCode::new("fr"), &overrides);
        assert!(!options.async_enabled);
    }

    #[test]
    fn test_widget_options_json() {
        let resolver = ConfigResolver::new(enabled_config());
        let json = resolver
            .widget_options_json(&StoreCode::default(), &ToolbarOverrides::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["asyncEnabled"], true);
        assert_eq!(value["scrollDurationMs"], 600);
        assert_eq!(value["params"]["pager"], "p");
    }
}
