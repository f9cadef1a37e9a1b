mod source_tests;

use sieve_types::LookupResult;

use crate::source::DefinitionSource;

/// Source answering every word with a fixed list
pub(crate) struct FixedSource {
    pub name: String,
    pub results: Vec<LookupResult>,
}

impl FixedSource {
    pub fn new(name: &str, results: Vec<LookupResult>) -> Box<Self> {
        Box::new(Self {
            name: name.to_string(),
            results,
        })
    }
}

impl DefinitionSource for FixedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn define(&self, _word: &str) -> Vec<LookupResult> {
        self.results.clone()
    }
}

pub(crate) fn result(headword: &str, definition: Option<&str>) -> LookupResult {
    LookupResult {
        headword: headword.to_string(),
        definition: definition.map(str::to_string),
        source: String::new(),
        render_mode: Default::default(),
        original_html: None,
    }
}
