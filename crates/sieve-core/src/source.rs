use sieve_config::SourceConfig;
use sieve_types::{LookupResult, RenderMode};

use crate::error::GroupError;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// A single dictionary a word can be looked up in
pub trait DefinitionSource: Send + Sync {
    /// Unique name, matched against `SourceConfig::name`
    fn name(&self) -> &str;

    /// Ordered results for `word`. `source` and `render_mode` are restamped by the group.
    fn define(&self, word: &str) -> Vec<LookupResult>;

    /// Mode used when the source is loaded but not configured
    fn default_mode(&self) -> RenderMode {
        RenderMode::Plaintext
    }
}

/// Configured dictionary sources queried together for one lookup
pub trait SourceGroup: Send + Sync {
    /// Results of every source, in source order
    fn define(&self, word: &str) -> Vec<LookupResult>;

    /// Current configuration of a source, if it is still part of the group
    fn source(&self, name: &str) -> Option<SourceConfig>;
}

/// Source group over a fixed, ordered list of sources
#[derive(Default)]
pub struct StaticSourceGroup {
    sources: Vec<(SourceConfig, Box<dyn DefinitionSource>)>,
}

impl StaticSourceGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        config: SourceConfig,
        source: Box<dyn DefinitionSource>,
    ) -> Result<(), GroupError> {
        if config.name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        if self.sources.iter().any(|(c, _)| c.name == config.name) {
            return Err(GroupError::DuplicateSource(config.name));
        }

        self.sources.push((config, source));
        Ok(())
    }

    /// Order sources by `configs`. Configured sources that are not loaded are skipped;
    /// loaded sources missing from `configs` go last with their default mode.
    /// A source with an empty or already taken name is logged and left out.
    pub fn from_config(configs: &[SourceConfig], loaded: Vec<Box<dyn DefinitionSource>>) -> Self {
        let mut loaded: Vec<Option<Box<dyn DefinitionSource>>> =
            loaded.into_iter().map(Some).collect();
        let mut group = Self::new();

        for config in configs {
            let slot = loaded
                .iter_mut()
                .find(|s| matches!(s, Some(s) if s.name() == config.name));

            match slot.and_then(Option::take) {
                Some(source) => group.push_or_skip(config.clone(), source),
                None => tracing::warn!("Configured source '{}' is not loaded", config.name),
            }
        }

        for source in loaded.into_iter().flatten() {
            tracing::debug!("Adding unconfigured source '{}'", source.name());
            let config = SourceConfig::new(source.name(), source.default_mode());
            group.push_or_skip(config, source);
        }

        group
    }

    fn push_or_skip(&mut self, config: SourceConfig, source: Box<dyn DefinitionSource>) {
        if let Err(e) = self.push(config, source) {
            tracing::warn!("Skipping source: {}", e);
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.sources.iter().map(|(c, _)| c.name.clone()).collect()
    }
}

impl SourceGroup for StaticSourceGroup {
    fn define(&self, word: &str) -> Vec<LookupResult> {
        let word = DefaultPreprocessor.process(word);
        if word.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for (config, source) in &self.sources {
            let found = source.define(&word);
            tracing::debug!("Source '{}': {} results for '{}'", config.name, found.len(), word);

            results.extend(found.into_iter().map(|mut r| {
                r.source = config.name.clone();
                r.render_mode = config.display_mode;
                r
            }));
        }

        results
    }

    fn source(&self, name: &str) -> Option<SourceConfig> {
        self.sources
            .iter()
            .find(|(c, _)| c.name == name)
            .map(|(c, _)| c.clone())
    }
}
