//! Store-scoped configuration data (`[default]` and `[stores.<code>]`).
//!
//! Each scope is a nested table following the `section/group/field` path
//! layout:
//!
//! ```toml
//! [default.catalog_ajax_toolbar.general]
//! enabled = true
//! ajax_request_timeout = 10000
//!
//! [stores.fr.catalog_ajax_toolbar.general]
//! scroll_to_top_enabled = false
//! ```
//!
//! A store scope falls back to the default scope path by path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use toml::{Table, Value};
use toolbar_domain::config::config_path::lookup_path;
use toolbar_application::{StoreCode, StoreConfigPort};

/// Raw configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Values for every store unless overridden
    pub default: Table,
    /// Per-store overrides keyed by store code
    pub stores: BTreeMap<String, Table>,
}

impl FileStoreConfig {
    /// Raw value at `path` in the given store, falling back to the default
    /// scope. Arrays, tables and datetimes read as missing.
    pub fn lookup(&self, path: &str, store: &StoreCode) -> Option<String> {
        if !store.is_default()
            && let Some(value) = self
                .stores
                .get(store.as_str())
                .and_then(|scope| lookup_in(scope, path))
        {
            return Some(value);
        }
        lookup_in(&self.default, path)
    }

    pub fn store_codes(&self) -> impl Iterator<Item = &str> {
        self.stores.keys().map(String::as_str)
    }

    /// Configured leaf paths, in any scope, that the resolver never reads.
    pub fn unknown_paths(&self) -> Vec<String> {
        let mut found = Vec::new();
        collect_leaves(&self.default, "", &mut found);
        for scope in self.stores.values() {
            collect_leaves(scope, "", &mut found);
        }
        found.retain(|path| lookup_path(path).is_none());
        found.sort();
        found.dedup();
        found
    }
}

fn collect_leaves(table: &Table, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}/{}", prefix, key)
        };
        match value {
            Value::Table(inner) => collect_leaves(inner, &path, out),
            _ => out.push(path),
        }
    }
}

fn lookup_in(scope: &Table, path: &str) -> Option<String> {
    let mut segments = path.split('/');
    let mut current = scope.get(segments.next()?)?;
    for segment in segments {
        current = current.as_table()?.get(segment)?;
    }
    scalar_text(current)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Datetime(_) | Value::Array(_) | Value::Table(_) => None,
    }
}

/// [`StoreConfigPort`] backed by a loaded [`FileStoreConfig`].
pub struct ScopedStoreConfig {
    config: FileStoreConfig,
}

impl ScopedStoreConfig {
    pub fn new(config: FileStoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FileStoreConfig {
        &self.config
    }
}

impl StoreConfigPort for ScopedStoreConfig {
    fn value(&self, path: &str, store: &StoreCode) -> Option<String> {
        self.config.lookup(path, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbar_domain::config::config_path::{
        AJAX_REQUEST_TIMEOUT, ENABLED, SCROLL_TO_TOP_EASING, SCROLL_TO_TOP_ENABLED,
    };

    fn sample() -> FileStoreConfig {
        toml::from_str(
            r#"
[default.catalog_ajax_toolbar.general]
enabled = true
ajax_request_timeout = 10000
scroll_to_top_enabled = true
scroll_to_top_easing = "swing"

[stores.fr.catalog_ajax_toolbar.general]
scroll_to_top_enabled = false
scroll_to_top_easing = ["not", "a", "scalar"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_scope_values() {
        let config = sample();
        let store = StoreCode::default();
        assert_eq!(config.lookup(ENABLED, &store), Some("1".to_string()));
        assert_eq!(
            config.lookup(AJAX_REQUEST_TIMEOUT, &store),
            Some("10000".to_string())
        );
    }

    #[test]
    fn test_store_scope_overrides_default() {
        let config = sample();
        let fr = StoreCode::new("fr");
        assert_eq!(config.lookup(SCROLL_TO_TOP_ENABLED, &fr), Some("0".to_string()));
        assert_eq!(config.lookup(AJAX_REQUEST_TIMEOUT, &fr), Some("10000".to_string()));
    }

    #[test]
    fn test_non_scalar_falls_back_to_default_scope() {
        let config = sample();
        assert_eq!(
            config.lookup(SCROLL_TO_TOP_EASING, &StoreCode::new("fr")),
            Some("swing".to_string())
        );
    }

    #[test]
    fn test_missing_path() {
        let config = sample();
        assert_eq!(
            config.lookup("catalog_ajax_toolbar/general/missing", &StoreCode::default()),
            None
        );
        assert_eq!(config.lookup("nope", &StoreCode::new("de")), None);
    }

    #[test]
    fn test_unknown_paths() {
        let mut config = sample();
        assert!(config.unknown_paths().is_empty());

        config.stores.insert(
            "de".to_string(),
            toml::from_str("[catalog_ajax_toolbar.general]\nscroll_speed = 3").unwrap(),
        );
        assert_eq!(
            config.unknown_paths(),
            vec!["catalog_ajax_toolbar/general/scroll_speed".to_string()]
        );
    }

    #[test]
    fn test_port_impl() {
        let port = ScopedStoreConfig::new(sample());
        assert_eq!(port.value(ENABLED, &StoreCode::new("fr")), Some("1".to_string()));
        assert_eq!(port.config().store_codes().collect::<Vec<_>>(), vec!["fr"]);
    }
}
