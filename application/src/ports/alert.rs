//! Visitor-facing alerts and message translation.

/// Shows a blocking alert to the visitor.
pub trait AlertPort: Send + Sync {
    fn alert(&self, message: &str);
}

/// Translates user-facing text into the storefront locale.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Translator that returns the text unchanged.
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}
