#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    /// The text has no `FROM` keyword, so there is no field list to annotate.
    #[error("malformed query text, no FROM keyword found: '{text}'")]
    MalformedQueryText { text: String },
}

impl AnnotationError {
    /// Build a `MalformedQueryText` error for `text`.
    pub fn malformed(text: &str) -> Self {
        AnnotationError::MalformedQueryText { text: text.to_string() }
    }
}
