use tracing::debug;

use crate::annotation::{AnnotationError, FieldListSpan};
use crate::translation::TranslationDictionary;

const FIELD_SEPARATOR: &str = ", ";

/// Rewrites a query's select list so that fields known to the translation
/// dictionary carry a display alias.
///
/// The field list is split on `", "` and each token is matched after removing
/// its first and last character (the delimiter pair, e.g. `[a]` or `` `a` ``).
/// Matching tokens become `<token> AS "<label>"`; token order and count never
/// change and the text around the field list is kept verbatim.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationEngine<'a> {
    dictionary: &'a TranslationDictionary,
}

impl<'a> AnnotationEngine<'a> {
    /// Create an engine that reads labels from `dictionary`.
    pub fn new(dictionary: &'a TranslationDictionary) -> Self {
        Self { dictionary }
    }

    /// Return `raw_sql` with display aliases added to recognized fields.
    ///
    /// Fails with [`AnnotationError::MalformedQueryText`] when there is no `FROM`.
    pub fn annotate(&self, raw_sql: &str) -> Result<String, AnnotationError> {
        let span = FieldListSpan::locate(raw_sql)?;
        if span.is_empty() {
            return Ok(raw_sql.to_string());
        }

        let fields = span
            .fields(raw_sql)
            .split(FIELD_SEPARATOR)
            .map(|token| self.annotate_token(token))
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR);

        let annotated = format!("{}{}{}", span.prefix(raw_sql), fields, span.suffix(raw_sql));
        debug!(sql = %annotated, "annotated query text");
        Ok(annotated)
    }

    /// Alias a single field token, or return it unchanged when it has no label.
    pub fn annotate_token(&self, token: &str) -> String {
        match Self::strip_delimiters(token).and_then(|name| self.dictionary.column_label(name)) {
            Some(label) => format!("{} AS \"{}\"", token, label.replace('"', "\"\"")),
            None => token.to_string(),
        }
    }

    /// Drop exactly the first and last character; `None` when nothing remains.
    pub fn strip_delimiters(token: &str) -> Option<&str> {
        let mut chars = token.chars();
        chars.next()?;
        chars.next_back()?;
        let inner = chars.as_str();
        if inner.is_empty() { None } else { Some(inner) }
    }
}

/// Convenience form of [`AnnotationEngine::annotate`].
pub fn annotate(raw_sql: &str, dictionary: &TranslationDictionary) -> Result<String, AnnotationError> {
    AnnotationEngine::new(dictionary).annotate(raw_sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(columns: &[(&str, &str)]) -> TranslationDictionary {
        TranslationDictionary::from_columns(columns.iter().copied())
    }

    #[test]
    fn test_single_field_gets_alias() {
        let dict = dictionary(&[("status", "Status Code")]);
        let result = annotate("SELECT [status] FROM events", &dict).unwrap();
        assert_eq!(result, "SELECT [status] AS \"Status Code\" FROM events");
    }

    #[test]
    fn test_only_matching_fields_change() {
        let dict = dictionary(&[("a", "Alpha")]);
        let result = annotate("SELECT [a], [b] FROM t", &dict).unwrap();
        assert_eq!(result, "SELECT [a] AS \"Alpha\", [b] FROM t");
    }

    #[test]
    fn test_empty_dictionary_is_identity() {
        let dict = TranslationDictionary::default();
        let sql = "SELECT [x] FROM t";
        assert_eq!(annotate(sql, &dict).unwrap(), sql);
    }

    #[test]
    fn test_no_matching_tokens_is_identity() {
        let dict = dictionary(&[("zzz", "Zed")]);
        let sql = "SELECT `a`, `b`, count(`c`) AS n FROM db.t WHERE `a` = 1 LIMIT 10";
        assert_eq!(annotate(sql, &dict).unwrap(), sql);
    }

    #[test]
    fn test_leading_whitespace_keeps_prefix() {
        let dict = dictionary(&[("status", "Status Code"), ("a", "Alpha")]);
        assert_eq!(
            annotate("\nSELECT [status] FROM events", &dict).unwrap(),
            "\nSELECT [status] AS \"Status Code\" FROM events"
        );
        assert_eq!(annotate("  SELECT [a] FROM t", &dict).unwrap(), "  SELECT [a] AS \"Alpha\" FROM t");
    }

    #[test]
    fn test_lowercase_from_in_literal_does_not_end_field_list() {
        let dict = dictionary(&[("status", "Status Code")]);
        let result = annotate("SELECT 'moved from x' AS src, [status] FROM events", &dict).unwrap();
        assert_eq!(result, "SELECT 'moved from x' AS src, [status] AS \"Status Code\" FROM events");
    }

    #[test]
    fn test_missing_from_fails() {
        let dict = dictionary(&[("a", "Alpha")]);
        let err = annotate("SELECT [a], [b]", &dict).unwrap_err();
        assert!(matches!(err, AnnotationError::MalformedQueryText { .. }));
    }

    #[test]
    fn test_degenerate_select_from_is_unchanged() {
        let dict = dictionary(&[("a", "Alpha")]);
        assert_eq!(annotate("SELECT FROM t", &dict).unwrap(), "SELECT FROM t");
    }

    #[test]
    fn test_short_tokens_never_match() {
        let dict = dictionary(&[("a", "Alpha"), ("", "Empty")]);
        assert_eq!(annotate("SELECT a, [], [a] FROM t", &dict).unwrap(), "SELECT a, [], [a] AS \"Alpha\" FROM t");
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let dict = dictionary(&[("Status", "Status Code"), ("stat", "Prefix")]);
        let sql = "SELECT [status], [statu] FROM t";
        assert_eq!(annotate(sql, &dict).unwrap(), sql);
    }

    #[test]
    fn test_backtick_delimited_fields() {
        let dict = dictionary(&[("host", "Хост"), ("ts", "Время")]);
        let result = annotate("SELECT `ts`, `host` FROM db.logs ORDER BY `ts`", &dict).unwrap();
        assert_eq!(result, "SELECT `ts` AS \"Время\", `host` AS \"Хост\" FROM db.logs ORDER BY `ts`");
    }

    #[test]
    fn test_label_quotes_are_doubled() {
        let dict = dictionary(&[("q", "say \"hi\"")]);
        let result = annotate("SELECT [q] FROM t", &dict).unwrap();
        assert_eq!(result, "SELECT [q] AS \"say \"\"hi\"\"\" FROM t");
    }

    #[test]
    fn test_already_annotated_text_is_stable() {
        let dict = dictionary(&[("a", "Alpha")]);
        let once = annotate("SELECT [a], [b] FROM t", &dict).unwrap();
        let twice = annotate(&once, &dict).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let dict = dictionary(&[("a", "Alpha"), ("b", "Beta")]);
        let engine = AnnotationEngine::new(&dict);
        let sql = "SELECT [a], [b], [c] FROM t";
        let first = engine.annotate(sql).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.annotate(sql).unwrap(), first);
        }
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(AnnotationEngine::strip_delimiters("[abc]"), Some("abc"));
        assert_eq!(AnnotationEngine::strip_delimiters("`é`"), Some("é"));
        assert_eq!(AnnotationEngine::strip_delimiters("ab"), None);
        assert_eq!(AnnotationEngine::strip_delimiters("a"), None);
        assert_eq!(AnnotationEngine::strip_delimiters(""), None);
    }
}
