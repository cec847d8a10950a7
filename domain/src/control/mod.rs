//! Toolbar controls: roles and element bindings.

pub mod binding;
pub mod role;

pub use binding::ControlBinding;
pub use role::ControlRole;
