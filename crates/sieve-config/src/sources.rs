use serde::{Deserialize, Serialize};
use sieve_types::RenderMode;

/// A configured dictionary source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    #[serde(default)]
    pub display_mode: RenderMode,
}

impl SourceConfig {
    pub fn new(name: impl Into<String>, display_mode: RenderMode) -> Self {
        Self {
            name: name.into(),
            display_mode,
        }
    }
}
