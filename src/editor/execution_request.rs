use crate::query::Query;

/// What the host hands to the data source when a query runs.
///
/// `query` is the persisted query with its format refreshed; its `raw_sql` is
/// exactly what the user authored. `executed_sql` is the text actually sent,
/// which may carry display aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRequest {
    pub query: Query,
    pub executed_sql: String,
    pub aliases_applied: bool,
    /// Set when annotation was attempted and failed, so the query went out
    /// without aliases.
    pub degraded: bool,
}

impl ExecutionRequest {
    /// Run `query` with its authored text as-is.
    pub fn unannotated(query: Query) -> Self {
        let executed_sql = query.raw_sql.clone();
        Self { query, executed_sql, aliases_applied: false, degraded: false }
    }
}
