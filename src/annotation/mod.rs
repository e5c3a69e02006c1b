pub mod annotation_error;
pub use annotation_error::*;

pub mod field_list_span;
pub use field_list_span::*;

pub mod annotation_engine;
pub use annotation_engine::*;
