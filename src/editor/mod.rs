pub mod editor_config;
pub use editor_config::*;

pub mod execution_request;
pub use execution_request::*;

pub mod query_editor;
pub use query_editor::*;
