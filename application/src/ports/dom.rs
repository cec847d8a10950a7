//! DOM port
//!
//! The widget never touches a document directly. Everything it needs from
//! the page (selector queries, control values, region replacement,
//! notifications) goes through [`DomPort`].

use toolbar_domain::{ElementId, ElementKind, EventKind};

/// Element-level operations on the hosting page.
///
/// Implementations live in the infrastructure layer (a browser binding, or
/// the headless page used by the CLI and tests).
pub trait DomPort: Send + Sync {
    /// Elements under `root` (excluding `root`) matching `selector`, in
    /// document order.
    fn find_within(&self, root: ElementId, selector: &str) -> Vec<ElementId>;

    /// Elements anywhere on the page matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    fn element_kind(&self, element: ElementId) -> ElementKind;

    /// Value of the selected option of a selection list.
    fn selected_value(&self, element: ElementId) -> Option<String>;

    /// Value of the element's `data-value` attribute.
    fn data_value(&self, element: ElementId) -> Option<String>;

    /// Start routing `event` on `element` to the widget registered under
    /// `namespace`.
    ///
    /// Returns `false` without binding when the element already carries a
    /// binding in that namespace.
    fn bind(&self, element: ElementId, event: EventKind, namespace: &str) -> bool;

    /// Drop the element's binding in `namespace`, if any.
    fn unbind(&self, element: ElementId, namespace: &str);

    fn remove(&self, element: ElementId);

    fn empty(&self, element: ElementId);

    fn set_inner_html(&self, element: ElementId, html: &str);

    /// Document-relative top offset in pixels.
    fn offset_top(&self, element: ElementId) -> Option<i64>;

    /// Dispatch a named notification on `element` for dependent widgets.
    fn dispatch(&self, element: ElementId, event_name: &str);
}
