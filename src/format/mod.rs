pub mod format_classifier;
pub use format_classifier::*;

pub mod resolution;
pub use resolution::*;

pub mod format_resolver;
pub use format_resolver::*;
