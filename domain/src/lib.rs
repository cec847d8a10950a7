//! Domain layer for catalog-toolbar
//!
//! This crate contains the core types and algorithms of the catalog listing
//! toolbar. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Reconciliation
//!
//! Every toolbar interaction changes one URL query parameter. The
//! [`query`] module merges that change into the widget's base URL, keeps
//! unrelated parameters verbatim and in order, and drops a parameter that
//! returns to its default.
//!
//! ## Options
//!
//! [`ToolbarOptions`] is the widget's immutable configuration. Store
//! configuration produces [`AsyncSettings`]; templates contribute
//! [`ToolbarOverrides`], merged field by field.

pub mod config;
pub mod control;
pub mod core;
pub mod options;
pub mod page;
pub mod query;
pub mod refresh;
pub mod scroll;
pub mod widget;

// Re-export commonly used types
pub use control::{ControlBinding, ControlRole};
pub use core::error::DomainError;
pub use options::{
    AsyncSettings, AsyncTunables, ControlSelectors, RoleValues, ToolbarOptions, ToolbarOverrides,
};
pub use page::{CONTENT_UPDATED_EVENT, ControlEvent, ElementId, ElementKind, EventKind};
pub use query::{BaseUrl, QueryState, ReconciledUrl};
pub use refresh::{RefreshHtml, RefreshResponse, RefreshResult};
pub use scroll::Easing;
pub use widget::WidgetState;
