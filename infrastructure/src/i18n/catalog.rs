//! TOML translation catalog
//!
//! ```toml
//! locale = "de_DE"
//!
//! [messages]
//! "Sorry, something went wrong. Please try again later." = "Leider ist ein Fehler aufgetreten."
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toolbar_application::Translator;
use tracing::trace;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Failed to read translation catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid translation catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    locale: Option<String>,
    messages: HashMap<String, String>,
}

/// [`Translator`] backed by a source-text → translation table.
///
/// Text without an entry is returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    locale: Option<String>,
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn from_toml_str(source: &str) -> Result<Self, TranslationError> {
        let file: CatalogFile = toml::from_str(source)?;
        Ok(Self {
            locale: file.locale,
            messages: file.messages,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, TranslationError> {
        let source = std::fs::read_to_string(path).map_err(|source| TranslationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, text: &str) -> String {
        match self.messages.get(text) {
            Some(translated) => translated.clone(),
            None => {
                trace!(text, "no translation entry");
                text.to_string()
            }
        }
    }
}
