use std::sync::Arc;

use tracing::{debug, warn};

use crate::annotation::AnnotationEngine;
use crate::builder::SqlGenerator;
use crate::editor::{AnnotationScope, ConfigError, EditorConfig, ExecutionRequest};
use crate::format::{FormatClassifier, FormatResolver, MacroClassifier};
use crate::locale::{LabelCatalog, RUN_WITHOUT_ALIASES};
use crate::query::{BuilderOptions, Query, QueryType, SelectedFormat};
use crate::translation::{TableOption, TranslationDictionary};

/// The editor host: turns user events into new [`Query`] snapshots and
/// prepares queries for execution.
///
/// Every method takes the current snapshot by reference and returns a new
/// value; the caller commits it. The translation dictionary is loaded once and
/// shared, never re-read per call.
#[derive(Debug, Clone)]
pub struct QueryEditor<C = MacroClassifier> {
    resolver: FormatResolver<C>,
    dictionary: Arc<TranslationDictionary>,
    labels: LabelCatalog,
    config: EditorConfig,
}

impl QueryEditor<MacroClassifier> {
    /// Create an editor around an already loaded dictionary.
    pub fn new(dictionary: Arc<TranslationDictionary>, config: EditorConfig) -> Self {
        Self {
            resolver: FormatResolver::new(),
            dictionary,
            labels: LabelCatalog::new(config.locale),
            config,
        }
    }

    /// Build an editor from `config`, loading the dictionary it points at.
    pub fn from_config(config: EditorConfig) -> Result<Self, ConfigError> {
        let dictionary = match &config.dictionary_path {
            Some(path) => {
                let dictionary = TranslationDictionary::from_file(path)?;
                debug!(
                    path = %path.display(),
                    columns = dictionary.columns().len(),
                    tables = dictionary.tables().len(),
                    "loaded translation dictionary"
                );
                dictionary
            }
            None => TranslationDictionary::default(),
        };
        Ok(Self::new(Arc::new(dictionary), config))
    }
}

impl<C: FormatClassifier> QueryEditor<C> {
    /// Swap the text-mode format classifier.
    pub fn with_classifier<D: FormatClassifier>(self, classifier: D) -> QueryEditor<D> {
        QueryEditor {
            resolver: FormatResolver::with_classifier(classifier),
            dictionary: self.dictionary,
            labels: self.labels,
            config: self.config,
        }
    }

    /// Replace the label catalog, e.g. one with merged overrides.
    pub fn with_labels(mut self, labels: LabelCatalog) -> Self {
        self.labels = labels;
        self
    }

    pub fn resolver(&self) -> &FormatResolver<C> { &self.resolver }
    pub fn dictionary(&self) -> &TranslationDictionary { &self.dictionary }
    pub fn labels(&self) -> &LabelCatalog { &self.labels }
    pub fn config(&self) -> &EditorConfig { &self.config }

    /// First sighting of a query. Returns the updated query when a text-mode
    /// query has no format preference yet, `None` when nothing changes.
    pub fn initialize(&self, query: &Query) -> Option<Query> {
        if query.selected_format.is_none() && query.query_type.is_text_mode() {
            return Some(self.resolver.resolve_applied(query));
        }
        None
    }

    /// The user picked a format in the format picker.
    pub fn change_format(&self, query: &Query, selected: SelectedFormat) -> Query {
        let query = Query { selected_format: Some(selected), ..query.clone() };
        self.resolver.resolve_applied(&query)
    }

    /// The authored text changed; the format is re-inferred when on `Auto`.
    pub fn change_raw_sql(&self, query: &Query, raw_sql: &str) -> Query {
        let query = Query { raw_sql: raw_sql.to_string(), ..query.clone() };
        self.resolver.resolve_applied(&query)
    }

    /// Switching to builder mode regenerates the text from the builder options
    /// the query already carries; switching to text mode keeps the text.
    pub fn change_query_type(&self, query: &Query, query_type: QueryType) -> Query {
        let mut query = Query { query_type, ..query.clone() };
        if query_type == QueryType::Builder {
            if let Some(options) = &query.builder_options {
                query.raw_sql = SqlGenerator::generate(options);
            }
        }
        self.resolver.resolve_applied(&query)
    }

    /// The builder options changed; the text is regenerated from them.
    pub fn change_builder_options(&self, query: &Query, options: BuilderOptions) -> Query {
        let query = Query {
            raw_sql: SqlGenerator::generate(&options),
            builder_options: Some(options),
            ..query.clone()
        };
        self.resolver.resolve_applied(&query)
    }

    /// Prepare `query` for execution.
    ///
    /// The format is refreshed and, when the configured scope covers the
    /// query, the executed text gets display aliases. A query whose text
    /// cannot be annotated still runs, with its authored text.
    pub fn run(&self, query: &Query) -> ExecutionRequest {
        let query = self.resolver.resolve_applied(query);

        if !self.should_annotate(&query) {
            debug!(ref_id = %query.ref_id, sql = %query.raw_sql, "running query");
            return ExecutionRequest::unannotated(query);
        }

        match AnnotationEngine::new(&self.dictionary).annotate(&query.raw_sql) {
            Ok(executed_sql) => {
                let aliases_applied = executed_sql != query.raw_sql;
                debug!(ref_id = %query.ref_id, sql = %executed_sql, "running query");
                ExecutionRequest { query, executed_sql, aliases_applied, degraded: false }
            }
            Err(err) => {
                warn!(ref_id = %query.ref_id, error = %err, "{}", self.labels.get(RUN_WITHOUT_ALIASES));
                ExecutionRequest { degraded: true, ..ExecutionRequest::unannotated(query) }
            }
        }
    }

    fn should_annotate(&self, query: &Query) -> bool {
        match self.config.annotation_scope {
            AnnotationScope::Off => false,
            AnnotationScope::TextMode => query.query_type.is_text_mode(),
            AnnotationScope::All => true,
        }
    }

    /// Table picker entries labelled from the translation dictionary.
    pub fn table_options(&self, tables: &[String], selected: Option<&str>) -> Vec<TableOption> {
        self.dictionary.table_options(tables, selected)
    }
}
