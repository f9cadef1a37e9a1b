use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_deck() -> String {
    "Default".to_string()
}

fn default_model() -> String {
    "Basic".to_string()
}

fn default_word_field() -> String {
    "Front".to_string()
}

fn default_definition_field() -> String {
    "Back".to_string()
}

fn default_tags() -> Vec<String> {
    vec!["sieve".to_string()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// Enable Anki integration
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Note type
    #[serde(default = "default_model")]
    pub model: String,
    /// Note field receiving the headword
    #[serde(default = "default_word_field")]
    pub word_field: String,
    /// Note field receiving the exported definition
    #[serde(default = "default_definition_field")]
    pub definition_field: String,
    /// Note field receiving the example sentence, if the note type has one
    pub sentence_field: Option<String>,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_url(),
            deck: default_deck(),
            model: default_model(),
            word_field: default_word_field(),
            definition_field: default_definition_field(),
            sentence_field: None,
            tags: default_tags(),
        }
    }
}

impl AnkiConfig {
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var("ANKI_CONNECT_URL") {
            self.url = url;
        }
    }
}
