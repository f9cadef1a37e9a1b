use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// JSON dictionary files to load
    #[serde(default)]
    pub paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            paths: vec![],
        }
    }
}
