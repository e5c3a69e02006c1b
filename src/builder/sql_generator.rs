use crate::builder::SqlText;
use crate::query::{BuilderFilter, BuilderMetric, BuilderMode, BuilderOptions, BuilderOrderBy, OrderDirection};

const TIME_ALIAS: &str = "time";

/// Generates query text from builder options.
///
/// Output is always a single line whose select list is `", "`-separated and
/// whose plain fields are backtick-delimited, which is the shape
/// [`AnnotationEngine`](crate::annotation::AnnotationEngine) expects.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlGenerator;

impl SqlGenerator {
    /// Query text for `options`, shaped by the builder mode.
    pub fn generate(options: &BuilderOptions) -> String {
        match (options.mode, options.time_field.as_deref()) {
            (BuilderMode::Trend, Some(time_field)) if !time_field.is_empty() => Self::trend(options, time_field),
            (BuilderMode::Aggregate | BuilderMode::Trend, _) => Self::aggregate(options),
            (BuilderMode::List | BuilderMode::Unrecognized, _) => Self::list(options),
        }
    }

    fn list(options: &BuilderOptions) -> String {
        let mut sql = SqlText::new();
        sql.append_syntax("SELECT ");
        if options.fields.is_empty() {
            sql.append_syntax("*");
        } else {
            sql.append_list(&options.fields, |sql, field| sql.append_identifier(field));
        }
        Self::append_from(&mut sql, options);
        Self::append_where(&mut sql, None, &options.filters);
        Self::append_order_by(&mut sql, &options.order_by);
        Self::append_limit(&mut sql, options.limit);
        sql.into_string()
    }

    fn aggregate(options: &BuilderOptions) -> String {
        let mut sql = SqlText::new();
        sql.append_syntax("SELECT ");
        sql.append_list(&options.group_by, |sql, field| sql.append_identifier(field));
        if !options.group_by.is_empty() && !options.metrics.is_empty() {
            sql.append_syntax(", ");
        }
        sql.append_list(&options.metrics, Self::append_metric);
        if options.group_by.is_empty() && options.metrics.is_empty() {
            sql.append_syntax("count()");
        }
        Self::append_from(&mut sql, options);
        Self::append_where(&mut sql, None, &options.filters);
        if !options.group_by.is_empty() {
            sql.append_syntax(" GROUP BY ");
            sql.append_list(&options.group_by, |sql, field| sql.append_identifier(field));
        }
        Self::append_order_by(&mut sql, &options.order_by);
        Self::append_limit(&mut sql, options.limit);
        sql.into_string()
    }

    fn trend(options: &BuilderOptions, time_field: &str) -> String {
        let mut sql = SqlText::new();
        sql.append_syntax("SELECT $__timeInterval(");
        sql.append_identifier(time_field);
        sql.append_syntax(") AS ");
        sql.append_syntax(TIME_ALIAS);
        for field in &options.group_by {
            sql.append_syntax(", ");
            sql.append_identifier(field);
        }
        for metric in &options.metrics {
            sql.append_syntax(", ");
            Self::append_metric(&mut sql, metric);
        }
        Self::append_from(&mut sql, options);
        Self::append_where(&mut sql, Some(time_field), &options.filters);
        sql.append_syntax(" GROUP BY ");
        sql.append_syntax(TIME_ALIAS);
        for field in &options.group_by {
            sql.append_syntax(", ");
            sql.append_identifier(field);
        }
        if options.order_by.is_empty() {
            sql.append_syntax(" ORDER BY ");
            sql.append_syntax(TIME_ALIAS);
        } else {
            Self::append_order_by(&mut sql, &options.order_by);
        }
        Self::append_limit(&mut sql, options.limit);
        sql.into_string()
    }

    fn append_metric(sql: &mut SqlText, metric: &BuilderMetric) {
        sql.append_syntax(metric.aggregation.function_name());
        sql.append_syntax("(");
        sql.append_identifier(&metric.field);
        sql.append_syntax(")");
        if let Some(alias) = metric.alias.as_deref().filter(|alias| !alias.is_empty()) {
            sql.append_syntax(" AS ");
            sql.append_identifier(alias);
        }
    }

    fn append_from(sql: &mut SqlText, options: &BuilderOptions) {
        sql.append_syntax(" FROM ");
        if let Some(database) = options.database.as_deref().filter(|db| !db.is_empty()) {
            sql.append_identifier(database);
            sql.append_syntax(".");
        }
        sql.append_identifier(&options.table);
    }

    fn append_where(sql: &mut SqlText, time_field: Option<&str>, filters: &[BuilderFilter]) {
        let mut conditions = Vec::new();
        if let Some(time_field) = time_field {
            let mut condition = SqlText::new();
            condition.append_syntax("$__timeFilter(");
            condition.append_identifier(time_field);
            condition.append_syntax(")");
            conditions.push(condition.into_string());
        }
        conditions.extend(filters.iter().filter_map(Self::render_filter));

        if !conditions.is_empty() {
            sql.append_syntax(" WHERE ");
            sql.append_syntax(&conditions.join(" AND "));
        }
    }

    /// `None` for a binary filter the user has not given a value yet.
    fn render_filter(filter: &BuilderFilter) -> Option<String> {
        let mut sql = SqlText::new();
        sql.append_identifier(&filter.key);
        sql.append_syntax(" ");
        sql.append_syntax(filter.operator.as_sql());
        if !filter.operator.is_unary() {
            let value = filter.value.as_ref()?;
            sql.append_syntax(" ");
            sql.append_literal(value);
        }
        Some(sql.into_string())
    }

    fn append_order_by(sql: &mut SqlText, order_by: &[BuilderOrderBy]) {
        if order_by.is_empty() {
            return;
        }
        sql.append_syntax(" ORDER BY ");
        sql.append_list(order_by, |sql, order| {
            sql.append_identifier(&order.name);
            sql.append_syntax(match order.dir {
                OrderDirection::Asc => " ASC",
                OrderDirection::Desc => " DESC",
            });
        });
    }

    fn append_limit(sql: &mut SqlText, limit: Option<u64>) {
        if let Some(limit) = limit {
            sql.append_syntax(" LIMIT ");
            sql.append_syntax(&limit.to_string());
        }
    }
}
