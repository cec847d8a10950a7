//! Association between a discovered control element and the parameter it drives.

use super::role::ControlRole;
use crate::page::{ElementId, ElementKind, EventKind};

/// One bound toolbar control.
///
/// Created during widget initialization, one per matched element, and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBinding {
    pub element: ElementId,
    pub kind: ElementKind,
    pub role: ControlRole,
    pub param: String,
    pub default_value: String,
}

impl ControlBinding {
    pub fn new(
        element: ElementId,
        kind: ElementKind,
        role: ControlRole,
        param: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            element,
            kind,
            role,
            param: param.into(),
            default_value: default_value.into(),
        }
    }

    /// Selection lists react to `change`, everything else to `click`.
    pub fn event(&self) -> EventKind {
        self.kind.trigger_event()
    }

    pub fn accepts(&self, event: EventKind) -> bool {
        self.event() == event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_binds_change() {
        let binding = ControlBinding::new(
            ElementId(3),
            ElementKind::SelectList,
            ControlRole::Order,
            "product_list_order",
            "position",
        );
        assert_eq!(binding.event(), EventKind::Change);
        assert!(!binding.accepts(EventKind::Click));
    }

    #[test]
    fn test_link_binds_click() {
        let binding =
            ControlBinding::new(ElementId(7), ElementKind::Clickable, ControlRole::Pager, "p", "1");
        assert!(binding.accepts(EventKind::Click));
    }
}
