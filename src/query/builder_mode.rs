use serde::{Deserialize, Serialize};

/// Structural template the visual builder uses to generate query text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderMode {
    #[default]
    List,
    Aggregate,
    Trend,
    #[serde(other)]
    Unrecognized,
}

impl BuilderMode {
    pub const KNOWN: [BuilderMode; 3] = [BuilderMode::List, BuilderMode::Aggregate, BuilderMode::Trend];
}
