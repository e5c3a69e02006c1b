use serde::{Deserialize, Serialize};

/// Which editing surface is authoritative for a query's `raw_sql`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// Hand-written query text.
    #[default]
    Sql,
    /// Text generated from structured builder options.
    Builder,
    /// Any value the host sent that this crate does not know about.
    #[serde(other)]
    Unrecognized,
}

impl QueryType {
    pub fn is_text_mode(&self) -> bool {
        matches!(self, QueryType::Sql)
    }
}
