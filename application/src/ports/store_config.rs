//! Store configuration port
//!
//! Read-only access to store-scoped configuration values.

use std::fmt;

/// Store scope identifier (e.g. `default`, `fr`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreCode(String);

impl StoreCode {
    pub const DEFAULT: &'static str = "default";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for StoreCode {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for StoreCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw configuration lookup.
///
/// Returns the value as text, or `None` when it is not configured in the
/// store scope or any scope it falls back to. Reads are idempotent.
pub trait StoreConfigPort: Send + Sync {
    fn value(&self, path: &str, store: &StoreCode) -> Option<String>;
}
