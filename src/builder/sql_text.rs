use serde_json::Value;

/// Append-only buffer for generated query text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SqlText {
    pub sql: String,
}

impl SqlText {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw SQL text verbatim.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Backtick-quoted identifier; embedded backticks are backslash-escaped.
    pub fn append_identifier(&mut self, name: &str) {
        self.sql.push('`');
        self.sql.push_str(&name.replace('`', "\\`"));
        self.sql.push('`');
    }

    /// Append a JSON value as an inline SQL literal. Strings are single-quoted.
    pub fn append_literal(&mut self, value: &Value) {
        match value {
            Value::Null => self.append_syntax("NULL"),
            Value::Bool(b) => self.append_syntax(&b.to_string()),
            Value::Number(n) => self.append_syntax(&n.to_string()),
            Value::String(s) => self.append_string(s),
            Value::Array(items) => {
                self.append_syntax("(");
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        self.append_syntax(", ");
                    }
                    self.append_literal(item);
                }
                self.append_syntax(")");
            }
            Value::Object(_) => self.append_string(&value.to_string()),
        }
    }

    fn append_string(&mut self, s: &str) {
        self.sql.push('\'');
        self.sql.push_str(&s.replace('\'', "''"));
        self.sql.push('\'');
    }

    /// Append `items` separated by `", "`, rendering each with `f`.
    pub fn append_list<T>(&mut self, items: &[T], mut f: impl FnMut(&mut Self, &T)) {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.append_syntax(", ");
            }
            f(self, item);
        }
    }

    /// The generated text.
    pub fn into_string(self) -> String {
        self.sql
    }
}
