use serde::{Deserialize, Serialize};

use crate::query::{BuilderMode, BuilderOptions, Format, QueryType, SelectedFormat};

/// A query as persisted by the editor host.
///
/// `raw_sql` is always the authored (or builder-generated) text; the text that
/// is actually executed lives in [`ExecutionRequest`](crate::editor::ExecutionRequest)
/// and is never written back here.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(default)]
    pub ref_id: String,
    #[serde(default)]
    pub query_type: QueryType,
    #[serde(default)]
    pub raw_sql: String,
    #[serde(default)]
    pub format: Format,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_format: Option<SelectedFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_options: Option<BuilderOptions>,
}

impl Query {
    /// Create a text-mode query with no format preference yet.
    pub fn sql(raw_sql: &str) -> Self {
        Self {
            query_type: QueryType::Sql,
            raw_sql: raw_sql.to_string(),
            ..Default::default()
        }
    }

    /// Create a builder-mode query; `raw_sql` is filled in by the generator.
    pub fn builder(builder_options: BuilderOptions) -> Self {
        Self {
            query_type: QueryType::Builder,
            builder_options: Some(builder_options),
            ..Default::default()
        }
    }

    pub fn with_ref_id(mut self, ref_id: &str) -> Self { self.ref_id = ref_id.to_string(); self }
    pub fn with_raw_sql(mut self, raw_sql: &str) -> Self { self.raw_sql = raw_sql.to_string(); self }
    pub fn with_selected_format(mut self, selected: SelectedFormat) -> Self { self.selected_format = Some(selected); self }

    /// Builder mode, if this query carries builder options.
    pub fn builder_mode(&self) -> Option<BuilderMode> {
        self.builder_options.as_ref().map(|options| options.mode)
    }
}
