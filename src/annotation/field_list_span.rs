use crate::annotation::AnnotationError;

const FROM: &str = "FROM";

/// Byte range of the selected field list inside a query text.
///
/// The list starts right after the whitespace character that ends the leading
/// keyword and stops before the whitespace character that
/// precedes `FROM`. Everything outside `start..end` is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldListSpan {
    pub start: usize,
    pub end: usize,
    pub from: usize,
}

impl FieldListSpan {
    /// Locate the field list of `text`.
    ///
    /// Leading whitespace before the keyword is skipped. `FROM` matches as a
    /// whole word outside quoted text: it must follow whitespace and be followed
    /// by whitespace or the end of the text. When the leading keyword is written
    /// in uppercase, an uppercase `FROM` wins over other spellings; otherwise the
    /// first case-insensitive match is used.
    pub fn locate(text: &str) -> Result<Self, AnnotationError> {
        let lead = text.len() - text.trim_start().len();
        let Some((keyword_ws, ch)) = text[lead..].char_indices().find(|(_, ch)| ch.is_whitespace()) else {
            return Err(AnnotationError::malformed(text));
        };
        let keyword_ws = lead + keyword_ws;
        let start = keyword_ws + ch.len_utf8();

        let uppercase = Self::is_uppercase_word(&text[lead..keyword_ws]);
        let Some((separator, from)) = Self::find_from(text, keyword_ws, uppercase) else {
            return Err(AnnotationError::malformed(text));
        };

        // "SELECT FROM t": the keyword separator is also the FROM separator
        let end = separator.max(start);

        Ok(Self { start, end, from })
    }

    /// Returns `(separator_offset, keyword_offset)` of the `FROM` that ends the
    /// field list, searching from byte `offset`.
    fn find_from(text: &str, offset: usize, prefer_uppercase: bool) -> Option<(usize, usize)> {
        let candidates = Self::from_candidates(text, offset);
        let uppercase = candidates
            .iter()
            .filter(|_| prefer_uppercase)
            .find(|&&(_, keyword)| &text[keyword..keyword + FROM.len()] == FROM);
        uppercase.or(candidates.first()).copied()
    }

    fn is_uppercase_word(word: &str) -> bool {
        word.chars().any(|ch| ch.is_ascii_uppercase()) && !word.chars().any(|ch| ch.is_ascii_lowercase())
    }

    /// Every whole-word `FROM` (any case) that is not inside `'...'`, `"..."`
    /// or `` `...` ``.
    fn from_candidates(text: &str, offset: usize) -> Vec<(usize, usize)> {
        let mut candidates = Vec::new();
        let mut quote: Option<char> = None;

        for (pos, ch) in text[offset..].char_indices() {
            let pos = offset + pos;
            if let Some(open) = quote {
                if ch == open {
                    quote = None;
                }
                continue;
            }
            if matches!(ch, '\'' | '"' | '`') {
                quote = Some(ch);
                continue;
            }
            if ch.is_whitespace() {
                let keyword = pos + ch.len_utf8();
                if Self::is_from_at(text, keyword) {
                    candidates.push((pos, keyword));
                }
            }
        }

        candidates
    }

    fn is_from_at(text: &str, pos: usize) -> bool {
        let Some(word) = text.get(pos..pos + FROM.len()) else {
            return false;
        };
        if !word.eq_ignore_ascii_case(FROM) {
            return false;
        }

        match text[pos + FROM.len()..].chars().next() {
            None => true,
            Some(next) => next.is_whitespace(),
        }
    }

    /// `true` for degenerate text such as `SELECT FROM t`.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The raw field list, separators included.
    pub fn fields<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Everything up to the field list, leading keyword included.
    pub fn prefix<'a>(&self, text: &'a str) -> &'a str {
        &text[..self.start]
    }

    /// Everything after the field list, starting at the whitespace before `FROM`.
    pub fn suffix<'a>(&self, text: &'a str) -> &'a str {
        &text[self.end..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_simple_list() {
        let text = "SELECT [a], [b] FROM t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "[a], [b]");
        assert_eq!(span.prefix(text), "SELECT ");
        assert_eq!(span.suffix(text), " FROM t");
        assert_eq!(&text[span.from..], "FROM t");
    }

    #[test]
    fn test_locate_lowercase_from() {
        let text = "select `a` from t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "`a`");
    }

    #[test]
    fn test_from_inside_identifier_is_ignored() {
        let text = "SELECT [FROM_DATE], [a] FROM t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "[FROM_DATE], [a]");
    }

    #[test]
    fn test_from_followed_by_newline() {
        let text = "SELECT [a]\nFROM\nt";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "[a]");
        assert_eq!(span.suffix(text), "\nFROM\nt");
    }

    #[test]
    fn test_missing_from_is_malformed() {
        let err = FieldListSpan::locate("SELECT [a], [b]").unwrap_err();
        assert_eq!(err, AnnotationError::malformed("SELECT [a], [b]"));
        assert!(FieldListSpan::locate("SELECT").is_err());
        assert!(FieldListSpan::locate("").is_err());
        assert!(FieldListSpan::locate("SELECT [a] FROMAGE").is_err());
    }

    #[test]
    fn test_degenerate_span_is_empty() {
        let span = FieldListSpan::locate("SELECT FROM t").unwrap();
        assert!(span.is_empty());

        let span = FieldListSpan::locate("SELECT  FROM t").unwrap();
        assert!(span.is_empty());
    }

    #[test]
    fn test_leading_whitespace_before_keyword() {
        let text = "\nSELECT [status] FROM events";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.prefix(text), "\nSELECT ");
        assert_eq!(span.fields(text), "[status]");

        let text = "  SELECT [a] FROM t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.prefix(text), "  SELECT ");
        assert_eq!(span.fields(text), "[a]");
        assert_eq!(span.suffix(text), " FROM t");
    }

    #[test]
    fn test_whitespace_only_is_malformed() {
        assert!(FieldListSpan::locate("   ").is_err());
        assert!(FieldListSpan::locate("\n\tSELECT").is_err());
    }

    #[test]
    fn test_from_inside_quotes_is_ignored() {
        let text = "SELECT 'moved from x' AS src, [status] FROM events";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "'moved from x' AS src, [status]");

        let text = "SELECT `a from b`, \"c FROM d\" FROM t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "`a from b`, \"c FROM d\"");
    }

    #[test]
    fn test_uppercase_from_preferred() {
        let text = "SELECT [a], x AS from , [b] FROM t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "[a], x AS from , [b]");

        let text = "select [a] from t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "[a]");
    }

    #[test]
    fn test_lowercase_keyword_takes_first_from() {
        let text = "select [a] from t WHERE x IN (SELECT y FROM z)";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "[a]");
        assert_eq!(span.suffix(text), " from t WHERE x IN (SELECT y FROM z)");
    }

    #[test]
    fn test_multibyte_whitespace_and_labels() {
        let text = "SELECT\u{3000}[é], [ß] FROM t";
        let span = FieldListSpan::locate(text).unwrap();
        assert_eq!(span.fields(text), "[é], [ß]");
    }
}
