//! Message translation adapters

mod catalog;

pub use catalog::{CatalogTranslator, TranslationError};
