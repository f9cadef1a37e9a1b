use std::path::Path;

use sieve_core::DefinitionSource;

pub mod json;

use json::JsonDictionary;

/// Load every dictionary file that parses. Broken files are logged and skipped.
pub fn load_dictionaries(paths: &[String]) -> Vec<Box<dyn DefinitionSource>> {
    let mut sources: Vec<Box<dyn DefinitionSource>> = Vec::new();

    for path in paths {
        match JsonDictionary::load_from_file(Path::new(path)) {
            Ok(dict) => {
                tracing::info!(
                    "Loaded dictionary '{}' ({} entries) from {}",
                    dict.name(),
                    dict.entry_count(),
                    path
                );
                sources.push(Box::new(dict));
            }
            Err(e) => {
                tracing::warn!("Failed to load dictionary from {}: {}", path, e);
            }
        }
    }

    sources
}
