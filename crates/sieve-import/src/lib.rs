pub mod clippings;
pub mod error;
pub mod history;
pub mod kindle;

pub use error::ImportError;
pub use history::{IdentityLemmatizer, Lemmatizer, LookupRecorder, MemoryHistory};
pub use kindle::{ImportSummary, KindleVocabImporter};

#[cfg(test)]
mod tests;
