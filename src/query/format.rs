use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The shape actually used to render query results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Table,
    #[serde(rename = "timeseries")]
    TimeSeries,
    Logs,
    Trace,
}

/// The user's declared rendering preference. `Auto` defers to inference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectedFormat {
    #[default]
    Auto,
    Table,
    #[serde(rename = "timeseries")]
    TimeSeries,
    Logs,
    Trace,
}

impl SelectedFormat {
    pub const ALL: [SelectedFormat; 5] = [
        SelectedFormat::Auto,
        SelectedFormat::Table,
        SelectedFormat::TimeSeries,
        SelectedFormat::Logs,
        SelectedFormat::Trace,
    ];

    pub fn is_auto(&self) -> bool {
        matches!(self, SelectedFormat::Auto)
    }

    /// The concrete format this preference pins, or `None` for `Auto`.
    pub fn explicit(&self) -> Option<Format> {
        match self {
            SelectedFormat::Auto => None,
            SelectedFormat::Table => Some(Format::Table),
            SelectedFormat::TimeSeries => Some(Format::TimeSeries),
            SelectedFormat::Logs => Some(Format::Logs),
            SelectedFormat::Trace => Some(Format::Trace),
        }
    }
}

impl From<Format> for SelectedFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Table => SelectedFormat::Table,
            Format::TimeSeries => SelectedFormat::TimeSeries,
            Format::Logs => SelectedFormat::Logs,
            Format::Trace => SelectedFormat::Trace,
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Table => f.write_str("table"),
            Format::TimeSeries => f.write_str("timeseries"),
            Format::Logs => f.write_str("logs"),
            Format::Trace => f.write_str("trace"),
        }
    }
}

impl Display for SelectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.explicit() {
            Some(format) => format.fmt(f),
            None => f.write_str("auto"),
        }
    }
}
