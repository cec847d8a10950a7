//! Widget options: full options, partial overrides, and resolver output.

pub mod overrides;
pub mod resolved;
pub mod toolbar_options;

pub use overrides::{ControlSelectorOverrides, RoleValueOverrides, ToolbarOverrides};
pub use resolved::{AsyncSettings, AsyncTunables};
pub use toolbar_options::{ControlSelectors, RoleValues, ToolbarOptions};
