//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod resolve_options;
pub mod toolbar_widget;
