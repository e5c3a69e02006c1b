pub mod query;
pub use query::{
    Aggregation, BuilderFilter, BuilderMetric, BuilderMode, BuilderOptions, BuilderOrderBy, FilterOperator, Format,
    OrderDirection, Query, QueryType, SelectedFormat,
};

pub mod format;
pub use format::{FormatClassifier, FormatResolver, MacroClassifier, Resolution};

pub mod annotation;
pub use annotation::{annotate, AnnotationEngine, AnnotationError};

pub mod translation;
pub use translation::{DictionaryError, TableOption, TranslationDictionary};

pub mod locale;
pub use locale::{LabelCatalog, Locale};

pub mod builder;
pub use builder::SqlGenerator;

pub mod editor;
pub use editor::{AnnotationScope, ConfigError, EditorConfig, ExecutionRequest, QueryEditor};
