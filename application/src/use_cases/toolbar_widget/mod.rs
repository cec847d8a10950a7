//! Catalog toolbar widget use case
//!
//! [`ToolbarWidget`] attaches to a toolbar root element, binds every control
//! it finds for the configured roles, and turns each interaction into either
//! an asynchronous listing refresh or a plain navigation.
//!
//! # Flow
//!
//! ```text
//! control change/click
//!        ↓
//! prevent native action, read candidate value
//!        ↓
//! reconcile base URL ──(async off)──▶ navigate
//!        ↓ (async on)
//! show loader, fetch path?query&ajax=1, hide loader
//!        ↓
//! success ──▶ replace history ──▶ scroll ──▶ replace regions ──▶ contentUpdated
//! failure ──▶ alert (URL and DOM untouched)
//! ```
//!
//! With `discard_superseded_responses` the history replacement moves after
//! the scroll, and a response overtaken by a newer interaction (checked
//! after the fetch and again after the scroll) leaves the page alone.
//!
//! Instances are created explicitly with [`ToolbarWidget::attach`]; there is
//! no registry. Several widgets can live on one page and each is disposed on
//! its own.

mod refresh;
mod types;
mod update;

pub use types::{InteractionOutcome, RegionUpdate, ToolbarPorts};

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use toolbar_domain::{
    ControlBinding, ControlEvent, ControlRole, ElementId, ElementKind, ToolbarOptions,
    WidgetState,
};
use tracing::{debug, error};

/// Namespace under which the widget claims control elements.
pub const WIDGET_NAMESPACE: &str = "catalogToolbar";

/// Shown when a refresh fails for any reason other than an endpoint message.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

pub struct ToolbarWidget {
    root: ElementId,
    options: ToolbarOptions,
    ports: ToolbarPorts,
    bindings: BTreeMap<ElementId, ControlBinding>,
    in_flight: AtomicUsize,
    sequence: AtomicU64,
    last_settled: Mutex<Option<WidgetState>>,
}

impl ToolbarWidget {
    /// Create a widget on `root` and bind its controls.
    pub fn attach(root: ElementId, options: ToolbarOptions, ports: ToolbarPorts) -> Self {
        let mut widget = Self {
            root,
            options,
            ports,
            bindings: BTreeMap::new(),
            in_flight: AtomicUsize::new(0),
            sequence: AtomicU64::new(0),
            last_settled: Mutex::new(None),
        };
        widget.initialize();
        widget
    }

    /// Scan the root for controls and bind the ones not bound yet.
    ///
    /// Safe to call repeatedly: an element already carrying a binding in
    /// [`WIDGET_NAMESPACE`] (from this or another instance) is skipped.
    /// Returns the number of newly bound elements.
    pub fn initialize(&mut self) -> usize {
        let mut bound = 0;
        for role in ControlRole::ALL {
            let selector = self.options.selectors.for_role(role).to_string();
            for element in self.ports.dom.find_within(self.root, &selector) {
                if self.bindings.contains_key(&element) {
                    continue;
                }
                let kind = self.ports.dom.element_kind(element);
                if !self
                    .ports
                    .dom
                    .bind(element, kind.trigger_event(), WIDGET_NAMESPACE)
                {
                    debug!(%element, %role, "control already bound, skipping");
                    continue;
                }
                let binding = ControlBinding::new(
                    element,
                    kind,
                    role,
                    self.options.param_for(role),
                    self.options.default_for(role),
                );
                debug!(%element, %role, param = %binding.param, "bound toolbar control");
                self.bindings.insert(element, binding);
                bound += 1;
            }
        }
        bound
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn options(&self) -> &ToolbarOptions {
        &self.options
    }

    pub fn bindings(&self) -> impl Iterator<Item = &ControlBinding> {
        self.bindings.values()
    }

    pub fn binding_for(&self, element: ElementId) -> Option<&ControlBinding> {
        self.bindings.get(&element)
    }

    /// `Submitting` while any interaction is in flight, `Idle` otherwise.
    pub fn state(&self) -> WidgetState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            WidgetState::Submitting
        } else {
            WidgetState::Idle
        }
    }

    /// Terminal state (`Updated` or `Failed`) of the most recent
    /// interaction that settled through one. Superseded interactions leave
    /// it unchanged.
    pub fn last_settled(&self) -> Option<WidgetState> {
        *self
            .last_settled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle a control interaction routed to this widget.
    ///
    /// Returns `None` (leaving the native action alone) when the element is
    /// not bound here or the event kind does not match its binding.
    pub async fn handle(&self, event: &mut ControlEvent) -> Option<InteractionOutcome> {
        let binding = self.bindings.get(&event.element)?;
        if !binding.accepts(event.kind) {
            return None;
        }
        event.prevent_default();

        let value = self.candidate_value(binding);
        Some(self.submit(binding, &value).await)
    }

    /// Dispatch one control change to refresh or navigation.
    pub async fn submit(&self, binding: &ControlBinding, value: &str) -> InteractionOutcome {
        let _guard = InFlight::enter(&self.in_flight);
        let state = advance(WidgetState::Idle, WidgetState::Submitting);
        debug!(role = %binding.role, param = %binding.param, %value, "toolbar interaction");

        let outcome = if self.options.async_enabled {
            self.refresh(binding, value).await
        } else {
            self.navigate(binding, value)
        };

        let settled = match outcome.terminal_state() {
            Some(terminal) => {
                *self
                    .last_settled
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Some(terminal);
                advance(state, terminal)
            }
            None => state,
        };
        advance(settled, WidgetState::Idle);
        outcome
    }

    /// Release every binding this instance holds.
    pub fn dispose(self) {
        for element in self.bindings.keys() {
            self.ports.dom.unbind(*element, WIDGET_NAMESPACE);
        }
        debug!(root = %self.root, count = self.bindings.len(), "toolbar widget disposed");
    }

    fn candidate_value(&self, binding: &ControlBinding) -> String {
        let value = match binding.kind {
            ElementKind::SelectList => self.ports.dom.selected_value(binding.element),
            ElementKind::Clickable => self.ports.dom.data_value(binding.element),
        };
        value.unwrap_or_default()
    }
}

/// Perform a state transition, logging instead of failing on an illegal one.
fn advance(state: WidgetState, next: WidgetState) -> WidgetState {
    state.transition(next).unwrap_or_else(|e| {
        error!("{}", e);
        next
    })
}

/// Counts an interaction as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
