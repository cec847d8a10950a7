//! Browser port
//!
//! Address-bar and navigation side effects.

/// Browser-level operations outside the document.
pub trait BrowserPort: Send + Sync {
    /// Whether in-place history replacement is available.
    fn supports_history_replace(&self) -> bool {
        true
    }

    /// Replace the current history entry's URL without reloading.
    fn replace_url(&self, url: &str);

    /// Full page navigation.
    fn navigate(&self, url: &str);

    fn current_url(&self) -> String;
}
