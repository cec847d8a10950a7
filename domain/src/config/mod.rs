//! Configuration value objects for the domain layer.

pub mod config_path;

pub use config_path::{ConfigPathInfo, ValueKind, coerce_flag, coerce_int};
