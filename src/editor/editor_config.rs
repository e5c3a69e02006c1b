use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::translation::DictionaryError;

/// Which queries get display aliases before they are executed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationScope {
    Off,
    /// Only hand-written (text mode) queries.
    #[default]
    TextMode,
    All,
}

/// Editor host configuration.
///
/// - `locale` selects the label catalog language.
/// - `annotation_scope` controls which queries are annotated on run.
/// - `dictionary_path` points at the translation dictionary JSON, if any.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub locale: Locale,
    pub annotation_scope: AnnotationScope,
    pub dictionary_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read editor config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("editor config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

impl EditorConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label catalog language.
    pub fn with_locale(mut self, locale: Locale) -> Self { self.locale = locale; self }
    /// Set which queries are annotated on run.
    pub fn with_annotation_scope(mut self, scope: AnnotationScope) -> Self { self.annotation_scope = scope; self }
    /// Point at the translation dictionary JSON file.
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self { self.dictionary_path = Some(path.into()); self }

    /// Parse a configuration from JSON; missing keys take their defaults.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
