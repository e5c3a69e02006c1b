pub mod query_type;
pub use query_type::*;

pub mod format;
pub use format::*;

pub mod builder_mode;
pub use builder_mode::*;

pub mod builder_options;
pub use builder_options::*;

pub mod query;
pub use query::*;
