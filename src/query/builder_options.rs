use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::BuilderMode;

/// Structured clauses the visual builder edits and generates query text from.
///
/// This crate only reads these options: `mode` drives format resolution and the
/// remaining clauses feed [`SqlGenerator`](crate::builder::SqlGenerator).
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderOptions {
    pub database: Option<String>,
    pub table: String,
    pub mode: BuilderMode,
    pub fields: Vec<String>,
    pub metrics: Vec<BuilderMetric>,
    pub filters: Vec<BuilderFilter>,
    pub group_by: Vec<String>,
    pub order_by: Vec<BuilderOrderBy>,
    pub limit: Option<u64>,
    pub time_field: Option<String>,
}

impl BuilderOptions {
    /// Create options for `table` in the given builder `mode`.
    pub fn new(table: &str, mode: BuilderMode) -> Self {
        Self {
            table: table.to_string(),
            mode,
            ..Default::default()
        }
    }

    pub fn with_database(mut self, database: &str) -> Self { self.database = Some(database.to_string()); self }
    pub fn with_field(mut self, field: &str) -> Self { self.fields.push(field.to_string()); self }
    pub fn with_metric(mut self, metric: BuilderMetric) -> Self { self.metrics.push(metric); self }
    pub fn with_filter(mut self, filter: BuilderFilter) -> Self { self.filters.push(filter); self }
    pub fn with_group_by(mut self, field: &str) -> Self { self.group_by.push(field.to_string()); self }
    pub fn with_order_by(mut self, order_by: BuilderOrderBy) -> Self { self.order_by.push(order_by); self }
    pub fn with_limit(mut self, limit: u64) -> Self { self.limit = Some(limit); self }
    pub fn with_time_field(mut self, field: &str) -> Self { self.time_field = Some(field.to_string()); self }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Count,
    Sum,
    Min,
    Max,
    Avg,
    Any,
}

impl Aggregation {
    /// SQL function this aggregation renders as.
    pub fn function_name(&self) -> &'static str {
        match self {
            Aggregation::Count => "count",
            Aggregation::Sum => "sum",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Avg => "avg",
            Aggregation::Any => "any",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderMetric {
    pub aggregation: Aggregation,
    pub field: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl BuilderMetric {
    /// Create an unaliased metric.
    pub fn new(aggregation: Aggregation, field: &str) -> Self {
        Self { aggregation, field: field.to_string(), alias: None }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,
    #[serde(rename = "IS NULL")]
    IsNull,
    #[serde(rename = "IS NOT NULL")]
    IsNotNull,
}

impl FilterOperator {
    /// SQL spelling of the operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "=",
            FilterOperator::NotEquals => "!=",
            FilterOperator::LessThan => "<",
            FilterOperator::LessThanOrEqual => "<=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::GreaterThanOrEqual => ">=",
            FilterOperator::Like => "LIKE",
            FilterOperator::NotLike => "NOT LIKE",
            FilterOperator::In => "IN",
            FilterOperator::NotIn => "NOT IN",
            FilterOperator::IsNull => "IS NULL",
            FilterOperator::IsNotNull => "IS NOT NULL",
        }
    }

    /// Operators that take no right-hand value.
    pub fn is_unary(&self) -> bool {
        matches!(self, FilterOperator::IsNull | FilterOperator::IsNotNull)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderFilter {
    pub key: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: Option<Value>,
}

impl BuilderFilter {
    /// Create a filter comparing `key` with `value`.
    pub fn new(key: &str, operator: FilterOperator, value: Value) -> Self {
        Self { key: key.to_string(), operator, value: Some(value) }
    }

    /// Create a filter without a right-hand value, e.g. `IS NULL`.
    pub fn unary(key: &str, operator: FilterOperator) -> Self {
        Self { key: key.to_string(), operator, value: None }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderOrderBy {
    pub name: String,
    #[serde(default)]
    pub dir: OrderDirection,
}

impl BuilderOrderBy {
    pub fn asc(name: &str) -> Self { Self { name: name.to_string(), dir: OrderDirection::Asc } }
    pub fn desc(name: &str) -> Self { Self { name: name.to_string(), dir: OrderDirection::Desc } }
}
