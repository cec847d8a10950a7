//! Toolbar widget lifecycle.

pub mod state;

pub use state::WidgetState;
