use crate::query::{Format, Query, SelectedFormat};

/// Output of [`FormatResolver::resolve`](crate::format::FormatResolver::resolve).
///
/// `selected_format` is `None` only when the query had no preference and was
/// not in text mode; the host keeps it unset in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub format: Format,
    pub selected_format: Option<SelectedFormat>,
}

impl Resolution {
    /// Commit this resolution into a copy of `query`.
    pub fn apply(self, query: &Query) -> Query {
        Query {
            format: self.format,
            selected_format: self.selected_format,
            ..query.clone()
        }
    }

    /// Whether committing this resolution would change `query`.
    pub fn differs_from(&self, query: &Query) -> bool {
        self.format != query.format || self.selected_format != query.selected_format
    }
}
