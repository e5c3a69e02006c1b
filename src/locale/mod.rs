pub mod locale;
pub use locale::*;

pub mod label_catalog;
pub use label_catalog::*;
