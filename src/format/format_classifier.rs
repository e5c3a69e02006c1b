use once_cell::sync::Lazy;
use regex::Regex;

use crate::query::Format;

/// Infers a rendering format from the shape of hand-written query text.
///
/// Implementations must be pure: the same text always classifies the same way.
pub trait FormatClassifier {
    fn classify(&self, raw_sql: &str) -> Format;
}

impl<F> FormatClassifier for F
where
    F: Fn(&str) -> Format,
{
    fn classify(&self, raw_sql: &str) -> Format {
        self(raw_sql)
    }
}

static TIME_INTERVAL_MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$__timeInterval(_ms)?\s*\(").expect("time interval macro pattern is valid")
});

/// Default classifier: text that buckets rows with the `$__timeInterval`
/// macro renders as a time series, anything else as a table.
///
/// Logs and traces are never inferred; they need an explicit choice.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroClassifier;

impl FormatClassifier for MacroClassifier {
    fn classify(&self, raw_sql: &str) -> Format {
        if TIME_INTERVAL_MACRO.is_match(raw_sql) {
            Format::TimeSeries
        } else {
            Format::Table
        }
    }
}
