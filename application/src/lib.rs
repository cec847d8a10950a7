//! Application layer for catalog-toolbar
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    alert::{AlertPort, PassthroughTranslator, Translator},
    browser::BrowserPort,
    dom::DomPort,
    listing_fetcher::{FetchError, ListingFetcher, RefreshRequest},
    loader::{LoadingIndicator, NoLoader},
    scroll::{NoScroll, ScrollAnimator},
    store_config::{StoreCode, StoreConfigPort},
};
pub use use_cases::resolve_options::ConfigResolver;
pub use use_cases::toolbar_widget::{
    GENERIC_ERROR_MESSAGE, InteractionOutcome, RegionUpdate, ToolbarPorts, ToolbarWidget,
    WIDGET_NAMESPACE,
};
