//! Console output

pub mod alert;
pub mod console;
