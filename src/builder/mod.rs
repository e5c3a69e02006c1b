pub mod sql_text;
pub use sql_text::*;

pub mod sql_generator;
pub use sql_generator::*;
