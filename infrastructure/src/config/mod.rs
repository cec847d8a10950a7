//! Configuration file loading for catalog-toolbar
//!
//! This module handles file I/O and merging of store configuration from
//! multiple sources. The priority order (highest to lowest):
//!
//! 1. `CATALOG_TOOLBAR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./catalog-toolbar.toml` or `./.catalog-toolbar.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/catalog-toolbar/config.toml`
//! 5. Default values

mod loader;
mod store_config;

pub use loader::{ConfigLoadError, ConfigLoader, ENV_PREFIX};
pub use store_config::{FileStoreConfig, ScopedStoreConfig};
