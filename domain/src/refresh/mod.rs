//! Asynchronous refresh payloads.

pub mod response;

pub use response::{RefreshHtml, RefreshResponse, RefreshResult};
