//! Configuration file loader with multi-source merging

use super::store_config::FileStoreConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use toolbar_domain::config::config_path::known_paths;

/// Environment variable prefix; `__` separates nested keys.
pub const ENV_PREFIX: &str = "CATALOG_TOOLBAR_";

const PROJECT_FILES: [&str; 2] = ["catalog-toolbar.toml", ".catalog-toolbar.toml"];

/// Errors raised while reading or merging configuration sources.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigLoadError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment (`CATALOG_TOOLBAR_DEFAULT__CATALOG_AJAX_TOOLBAR__GENERAL__ENABLED=1`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./catalog-toolbar.toml` or `./.catalog-toolbar.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/catalog-toolbar/config.toml`
    /// 5. Default values (empty: asynchronous mode off)
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileStoreConfig, ConfigLoadError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileStoreConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment.extract()?)
    }

    /// Load a single file, ignoring every other source.
    pub fn load_file(path: &Path) -> Result<FileStoreConfig, ConfigLoadError> {
        Figment::new()
            .merge(Serialized::defaults(FileStoreConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(ConfigLoadError::from)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileStoreConfig {
        FileStoreConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/catalog-toolbar/config.toml if set,
    /// otherwise falls back to ~/.config/catalog-toolbar/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("catalog-toolbar").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");

        println!();
        println!("Settings ([default] or [stores.<code>] scope):");
        for info in known_paths() {
            println!("  {:<52} {:<6} {}", info.path, info.kind.as_str(), info.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use toolbar_application::StoreCode;
    use toolbar_domain::config::config_path::{AJAX_REQUEST_TIMEOUT, ENABLED};

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.default.is_empty());
        assert!(config.stores.is_empty());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("catalog-toolbar"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[default.catalog_ajax_toolbar.general]
enabled = 1
ajax_request_timeout = 4000

[stores.de.catalog_ajax_toolbar.general]
enabled = 0
"#
        )
        .unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(
            config.lookup(ENABLED, &StoreCode::default()),
            Some("1".to_string())
        );
        assert_eq!(config.lookup(ENABLED, &StoreCode::new("de")), Some("0".to_string()));
        assert_eq!(
            config.lookup(AJAX_REQUEST_TIMEOUT, &StoreCode::new("de")),
            Some("4000".to_string())
        );
    }

    #[test]
    fn test_load_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default = 3").unwrap();
        assert!(ConfigLoader::load_file(file.path()).is_err());
    }
}
