pub mod loaders;
pub mod types;

pub use loaders::json::JsonDictionary;
pub use loaders::load_dictionaries;
pub use types::{DictEntry, LoadError};
