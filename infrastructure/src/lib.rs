//! Infrastructure layer for catalog-toolbar
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
#[cfg(feature = "web")]
pub mod headless;
#[cfg(feature = "web")]
pub mod http;
pub mod i18n;

// Re-export commonly used types
pub use config::{ConfigLoadError, ConfigLoader, FileStoreConfig, ScopedStoreConfig};
#[cfg(feature = "web")]
pub use headless::{FrameScroll, HeadlessPage, HeadlessPageError};
#[cfg(feature = "web")]
pub use http::ReqwestListingFetcher;
pub use i18n::{CatalogTranslator, TranslationError};
