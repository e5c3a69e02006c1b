use crate::format::{FormatClassifier, MacroClassifier, Resolution};
use crate::query::{BuilderMode, Format, Query, QueryType, SelectedFormat};

/// Computes the effective rendering format of a query.
///
/// Resolution is total and side-effect free: text-mode queries with an `Auto`
/// preference are classified from their text, builder queries derive the
/// format from the builder mode, and any explicit preference wins outright.
/// Anything unrecognized falls back to [`Format::Table`].
#[derive(Debug, Default, Clone)]
pub struct FormatResolver<C = MacroClassifier> {
    classifier: C,
}

impl FormatResolver<MacroClassifier> {
    /// Create a resolver using the default [`MacroClassifier`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: FormatClassifier> FormatResolver<C> {
    /// Create a resolver that classifies text-mode queries with `classifier`.
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Effective `(format, selected_format)` pair for `query`.
    pub fn resolve(&self, query: &Query) -> Resolution {
        match query.query_type {
            QueryType::Sql => {
                // first sighting of a text query: the preference becomes Auto
                let selected = query.selected_format.unwrap_or(SelectedFormat::Auto);
                let format = match selected.explicit() {
                    Some(format) => format,
                    None => self.classifier.classify(&query.raw_sql),
                };
                Resolution { format, selected_format: Some(selected) }
            }
            QueryType::Builder | QueryType::Unrecognized => {
                let selected = query.selected_format.unwrap_or_default();
                let format = match selected.explicit() {
                    Some(format) => format,
                    None => Self::builder_default(query.builder_mode()),
                };
                Resolution { format, selected_format: query.selected_format }
            }
        }
    }

    /// Resolve and commit in one step.
    pub fn resolve_applied(&self, query: &Query) -> Query {
        self.resolve(query).apply(query)
    }

    /// Format an `Auto` builder query renders as.
    pub fn builder_default(mode: Option<BuilderMode>) -> Format {
        match mode {
            Some(BuilderMode::Trend) => Format::TimeSeries,
            _ => Format::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::BuilderOptions;

    fn builder_query(mode: BuilderMode, selected: Option<SelectedFormat>) -> Query {
        Query {
            query_type: QueryType::Builder,
            builder_options: Some(BuilderOptions::new("events", mode)),
            selected_format: selected,
            ..Default::default()
        }
    }

    #[test]
    fn test_builder_trend_auto_is_time_series() {
        let resolver = FormatResolver::new();
        let resolution = resolver.resolve(&builder_query(BuilderMode::Trend, Some(SelectedFormat::Auto)));
        assert_eq!(resolution.format, Format::TimeSeries);
        assert_eq!(resolution.selected_format, Some(SelectedFormat::Auto));
    }

    #[test]
    fn test_builder_list_and_aggregate_auto_are_table() {
        let resolver = FormatResolver::new();
        for mode in [BuilderMode::List, BuilderMode::Aggregate] {
            let resolution = resolver.resolve(&builder_query(mode, Some(SelectedFormat::Auto)));
            assert_eq!(resolution.format, Format::Table, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_explicit_choice_wins_in_every_mode() {
        let resolver = FormatResolver::new();
        let explicit = [SelectedFormat::Table, SelectedFormat::TimeSeries, SelectedFormat::Logs, SelectedFormat::Trace];

        for selected in explicit {
            for mode in BuilderMode::KNOWN {
                let resolution = resolver.resolve(&builder_query(mode, Some(selected)));
                assert_eq!(Some(resolution.format), selected.explicit());
            }

            let text = Query::sql("SELECT $__timeInterval(ts) FROM t").with_selected_format(selected);
            assert_eq!(Some(resolver.resolve(&text).format), selected.explicit());
        }
    }

    #[test]
    fn test_text_mode_without_preference_gets_auto() {
        let resolver = FormatResolver::new();
        let resolution = resolver.resolve(&Query::sql("SELECT [status] FROM events"));
        assert_eq!(resolution.selected_format, Some(SelectedFormat::Auto));
        assert_eq!(resolution.format, Format::Table);

        let resolution = resolver.resolve(&Query::sql("SELECT $__timeInterval(ts) AS time FROM events"));
        assert_eq!(resolution.format, Format::TimeSeries);
    }

    #[test]
    fn test_text_mode_auto_uses_classifier() {
        let resolver = FormatResolver::with_classifier(|sql: &str| {
            if sql.contains("trace_id") { Format::Trace } else { Format::Logs }
        });
        let query = Query::sql("SELECT trace_id FROM spans").with_selected_format(SelectedFormat::Auto);
        assert_eq!(resolver.resolve(&query).format, Format::Trace);
        assert_eq!(resolver.resolve(&Query::sql("SELECT body FROM logs")).format, Format::Logs);
    }

    #[test]
    fn test_builder_without_preference_resolves_like_auto_and_stays_unset() {
        let resolver = FormatResolver::new();
        let resolution = resolver.resolve(&builder_query(BuilderMode::Trend, None));
        assert_eq!(resolution.format, Format::TimeSeries);
        assert_eq!(resolution.selected_format, None);
    }

    #[test]
    fn test_unrecognized_combinations_fall_back_to_table() {
        let resolver = FormatResolver::new();

        let unknown_mode = builder_query(BuilderMode::Unrecognized, Some(SelectedFormat::Auto));
        assert_eq!(resolver.resolve(&unknown_mode).format, Format::Table);

        let no_options = Query { query_type: QueryType::Builder, ..Default::default() };
        assert_eq!(resolver.resolve(&no_options).format, Format::Table);

        let unknown_type = Query {
            query_type: QueryType::Unrecognized,
            raw_sql: "SELECT $__timeInterval(ts) FROM t".to_string(),
            ..Default::default()
        };
        assert_eq!(resolver.resolve(&unknown_type).format, Format::Table);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = FormatResolver::new();
        let queries = vec![
            Query::sql("SELECT $__timeInterval(ts) FROM t"),
            Query::sql("SELECT [a] FROM t").with_selected_format(SelectedFormat::Logs),
            builder_query(BuilderMode::Trend, None),
            builder_query(BuilderMode::Aggregate, Some(SelectedFormat::Auto)),
        ];

        for query in queries {
            let first = resolver.resolve(&query);
            let applied = first.apply(&query);
            assert_eq!(resolver.resolve(&applied), first);
            assert!(!resolver.resolve(&applied).differs_from(&applied));
            assert_eq!(resolver.resolve(&query), first);
        }
    }

    #[test]
    fn test_resolve_applied_keeps_other_fields() {
        let resolver = FormatResolver::new();
        let query = Query::sql("SELECT [a] FROM t").with_ref_id("B");
        let applied = resolver.resolve_applied(&query);
        assert_eq!(applied.ref_id, "B");
        assert_eq!(applied.raw_sql, query.raw_sql);
        assert_eq!(applied.selected_format, Some(SelectedFormat::Auto));
    }
}
