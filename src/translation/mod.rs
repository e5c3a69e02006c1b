pub mod dictionary_error;
pub use dictionary_error::*;

pub mod translation_dictionary;
pub use translation_dictionary::*;

pub mod table_option;
pub use table_option::*;
