use serde::{Deserialize, Serialize};

use crate::translation::TranslationDictionary;

/// One entry of the builder's table picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableOption {
    pub label: String,
    pub value: String,
}

impl TableOption {
    /// Create an entry showing `label` for table `value`.
    pub fn new(label: &str, value: &str) -> Self {
        Self { label: label.to_string(), value: value.to_string() }
    }
}

impl TranslationDictionary {
    /// Picker entries for `tables`, labelled from the dictionary where possible.
    ///
    /// A `selected` table that the data source no longer lists is appended
    /// under its raw name so the current choice stays visible.
    pub fn table_options(&self, tables: &[String], selected: Option<&str>) -> Vec<TableOption> {
        let mut options: Vec<TableOption> = tables
            .iter()
            .map(|table| TableOption::new(self.table_label(table).unwrap_or(table), table))
            .collect();

        if let Some(selected) = selected.filter(|s| !s.is_empty()) {
            if !tables.iter().any(|table| table == selected) {
                options.push(TableOption::new(selected, selected));
            }
        }

        options
    }
}
