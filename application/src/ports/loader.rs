//! Loading indicator port

/// Shows and hides the page's loading indicator around a listing refresh.
///
/// Every `show` is paired with exactly one `hide`, whatever the outcome.
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Indicator for pages without one.
pub struct NoLoader;

impl LoadingIndicator for NoLoader {
    fn show(&self) {}
    fn hide(&self) {}
}
