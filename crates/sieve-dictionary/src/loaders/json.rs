use std::collections::HashMap;
use std::path::Path;

use sieve_core::DefinitionSource;
use sieve_types::LookupResult;

use crate::types::{DictEntry, DictFile, LoadError};

/// Dictionary read from a JSON file, indexed by headword and inflected forms
pub struct JsonDictionary {
    name: String,
    entries: Vec<DictEntry>,
    index: HashMap<String, Vec<usize>>,
}

impl JsonDictionary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let file: DictFile = serde_json::from_str(json_str)?;

        let mut dict = Self::new(file.name);
        for entry in file.entries {
            dict.insert(entry);
        }

        Ok(dict)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::debug!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, entry: DictEntry) {
        let entry_idx = self.entries.len();

        let keys = std::iter::once(&entry.headword).chain(entry.forms.iter());
        for key in keys {
            let indices = self.index.entry(key.to_lowercase()).or_default();
            if !indices.contains(&entry_idx) {
                indices.push(entry_idx);
            }
        }

        self.entries.push(entry);
    }
}

impl DefinitionSource for JsonDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn define(&self, word: &str) -> Vec<LookupResult> {
        let Some(indices) = self.index.get(&word.to_lowercase()) else {
            return Vec::new();
        };

        indices
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
            .map(|e| LookupResult {
                headword: e.headword.clone(),
                definition: e.definition.clone(),
                source: self.name.clone(),
                render_mode: Default::default(),
                original_html: e.html.clone(),
            })
            .collect()
    }
}
