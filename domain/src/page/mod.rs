//! Page-level value objects shared by the widget and its DOM adapters.

use std::fmt;

/// Opaque handle to an element owned by a DOM adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a control is interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<select>`: the value is the selected option
    SelectList,
    /// Links and buttons: the value is a `data-value` attribute
    Clickable,
}

impl ElementKind {
    pub fn trigger_event(&self) -> EventKind {
        match self {
            ElementKind::SelectList => EventKind::Change,
            ElementKind::Clickable => EventKind::Click,
        }
    }
}

/// DOM events the widget listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Click,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::Click => "click",
        }
    }
}

/// A user interaction delivered to a widget.
///
/// The widget calls [`ControlEvent::prevent_default`] when it takes over the
/// interaction; the host must then skip the element's native action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEvent {
    pub element: ElementId,
    pub kind: EventKind,
    default_prevented: bool,
}

impl ControlEvent {
    pub fn new(element: ElementId, kind: EventKind) -> Self {
        Self {
            element,
            kind,
            default_prevented: false,
        }
    }

    pub fn click(element: ElementId) -> Self {
        Self::new(element, EventKind::Click)
    }

    pub fn change(element: ElementId) -> Self {
        Self::new(element, EventKind::Change)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Name of the notification dispatched after a region is replaced.
pub const CONTENT_UPDATED_EVENT: &str = "contentUpdated";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevent_default() {
        let mut event = ControlEvent::click(ElementId(1));
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
