use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::translation::DictionaryError;

/// Immutable mapping from bare field and table names to display labels.
///
/// The dictionary is loaded once by the host and shared read-only with every
/// annotation and table listing afterwards. The on-disk form is
///
/// ```json
/// { "columns": { "status": "Status Code" }, "tables": { "events": "Events" } }
/// ```
///
/// `colomns` is accepted in place of `columns` for older label files.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationDictionary {
    #[serde(alias = "colomns")]
    columns: IndexMap<String, String>,
    tables: IndexMap<String, String>,
}

impl TranslationDictionary {
    /// Create a dictionary from column and table label maps.
    pub fn new(columns: IndexMap<String, String>, tables: IndexMap<String, String>) -> Self {
        Self { columns, tables }
    }

    /// Create a dictionary with column labels only.
    pub fn from_columns<I, K, V>(columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            tables: IndexMap::new(),
        }
    }

    /// Replace the table labels.
    pub fn with_tables<I, K, V>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tables = tables.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Parse a dictionary from its JSON form.
    pub fn from_json_str(content: &str) -> Result<Self, DictionaryError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a dictionary file. Call once at startup.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Exact, case-sensitive lookup of a field's display label.
    pub fn column_label(&self, field: &str) -> Option<&str> {
        self.columns.get(field).map(String::as_str)
    }

    /// Display label of a table, if the dictionary has one.
    pub fn table_label(&self, table: &str) -> Option<&str> {
        self.tables.get(table).map(String::as_str)
    }

    pub fn columns(&self) -> &IndexMap<String, String> {
        &self.columns
    }

    pub fn tables(&self) -> &IndexMap<String, String> {
        &self.tables
    }

    /// `true` when there are neither column nor table labels.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.tables.is_empty()
    }
}
