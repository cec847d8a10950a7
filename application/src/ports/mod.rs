//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod alert;
pub mod browser;
pub mod dom;
pub mod listing_fetcher;
pub mod loader;
pub mod scroll;
pub mod store_config;
