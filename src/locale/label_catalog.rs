use indexmap::IndexMap;

use crate::locale::Locale;
use crate::query::{BuilderMode, SelectedFormat};

pub const FORMAT_LABEL: &str = "format.label";
pub const QUERY_TYPE_LABEL: &str = "queryType.label";
pub const RUN_QUERY: &str = "run.button";
pub const RUN_WITHOUT_ALIASES: &str = "run.withoutAliases";

const BUILTIN: &[(&str, &str, &str)] = &[
    // key, en, ru
    (FORMAT_LABEL, "Format", "Формат"),
    ("format.auto", "Auto", "Авто"),
    ("format.table", "Table", "Таблица"),
    ("format.timeseries", "Time Series", "Временные серии"),
    ("format.logs", "Logs", "Логи"),
    ("format.trace", "Traces", "Трэйсы"),
    (QUERY_TYPE_LABEL, "Query Type", "Тип запроса"),
    ("queryType.sql", "SQL Editor", "SQL Editor"),
    ("queryType.builder", "Query Builder", "Query Builder"),
    ("builder.mode.list", "List", "Таблица"),
    ("builder.mode.aggregate", "Aggregate", "Аггрегат"),
    ("builder.mode.trend", "Time Series", "Временные серии"),
    (RUN_QUERY, "Run query", "Выполнить запрос"),
    (RUN_WITHOUT_ALIASES, "Query sent without display aliases", "Запрос отправлен без псевдонимов"),
];

/// Display strings for the editor chrome, keyed by a stable label key.
///
/// Lookups use the active locale first, then English, then echo the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCatalog {
    locale: Locale,
    entries: IndexMap<Locale, IndexMap<String, String>>,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl LabelCatalog {
    /// Create a catalog with the built-in strings, active in `locale`.
    pub fn new(locale: Locale) -> Self {
        let mut entries: IndexMap<Locale, IndexMap<String, String>> = IndexMap::new();
        for (key, en, ru) in BUILTIN {
            entries.entry(Locale::En).or_default().insert(key.to_string(), en.to_string());
            entries.entry(Locale::Ru).or_default().insert(key.to_string(), ru.to_string());
        }
        Self { locale, entries }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the active locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Merge `overrides` into `locale`, replacing built-in strings with the same key.
    pub fn merge(&mut self, locale: Locale, overrides: IndexMap<String, String>) {
        self.entries.entry(locale).or_default().extend(overrides);
    }

    /// Merge a JSON object of `key -> label` overrides into `locale`.
    pub fn merge_json(&mut self, locale: Locale, content: &str) -> Result<(), serde_json::Error> {
        let overrides: IndexMap<String, String> = serde_json::from_str(content)?;
        self.merge(locale, overrides);
        Ok(())
    }

    /// Label for `key`.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(self.locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .unwrap_or(key)
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries.get(&locale)?.get(key).map(String::as_str)
    }

    /// Picker label of a format preference.
    pub fn format_label(&self, format: SelectedFormat) -> &str {
        match format {
            SelectedFormat::Auto => self.get("format.auto"),
            SelectedFormat::Table => self.get("format.table"),
            SelectedFormat::TimeSeries => self.get("format.timeseries"),
            SelectedFormat::Logs => self.get("format.logs"),
            SelectedFormat::Trace => self.get("format.trace"),
        }
    }

    /// Picker label of a builder mode; unknown modes show as list.
    pub fn builder_mode_label(&self, mode: BuilderMode) -> &str {
        match mode {
            BuilderMode::List => self.get("builder.mode.list"),
            BuilderMode::Aggregate => self.get("builder.mode.aggregate"),
            BuilderMode::Trend => self.get("builder.mode.trend"),
            BuilderMode::Unrecognized => self.get("builder.mode.list"),
        }
    }

    /// `(label, value)` pairs for the format picker, in picker order.
    pub fn format_options(&self) -> Vec<(&str, SelectedFormat)> {
        SelectedFormat::ALL.iter().map(|format| (self.format_label(*format), *format)).collect()
    }
}
