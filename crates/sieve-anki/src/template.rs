use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use sieve_config::anki::AnkiConfig;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(word|definition|sentence)\}").expect("valid placeholder regex")
});

/// Maps note fields to templates over `{word}`, `{definition}` and `{sentence}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub deck: String,
    pub model: String,
    pub fields: Vec<NoteField>,
    pub tags: Vec<String>,
}

impl CardTemplate {
    pub fn from_config(config: &AnkiConfig) -> Self {
        let mut fields = vec![
            NoteField::new(&config.word_field, "{word}"),
            NoteField::new(&config.definition_field, "{definition}"),
        ];
        if let Some(sentence_field) = &config.sentence_field {
            fields.push(NoteField::new(sentence_field, "{sentence}"));
        }

        Self {
            deck: config.deck.clone(),
            model: config.model.clone(),
            fields,
            tags: config.tags.clone(),
        }
    }

    /// Fill every field template. Inserted text is never scanned for placeholders.
    pub fn format(&self, word: &str, definition: &str, sentence: &str) -> Vec<NoteField> {
        self.fields
            .iter()
            .map(|f| NoteField {
                name: f.name.clone(),
                value: fill(&f.value, word, definition, sentence),
            })
            .collect()
    }
}

fn fill(template: &str, word: &str, definition: &str, sentence: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "word" => word,
            "definition" => definition,
            _ => sentence,
        })
        .into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteField {
    pub name: String,
    pub value: String,
}

impl NoteField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
