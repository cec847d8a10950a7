//! Presentation layer for catalog-toolbar
//!
//! This crate contains CLI definitions, output formatters
//! and the console alert adapter.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::alert::ConsoleAlert;
pub use output::console::{ConsoleFormatter, SimulationReport};
