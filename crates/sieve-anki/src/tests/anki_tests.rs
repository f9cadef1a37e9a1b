use std::sync::Mutex;

use anyhow::Result;
use serde_json::json;
use sieve_config::anki::AnkiConfig;

use crate::client::{AnkiResponse, note_params};
use crate::{CardTemplate, FlashcardBackend, NoteField, add_card};

#[derive(Default)]
struct RecordingBackend {
    notes: Mutex<Vec<(String, String, Vec<NoteField>, Vec<String>)>>,
}

#[async_trait::async_trait]
impl FlashcardBackend for RecordingBackend {
    async fn add_note(
        &self,
        deck: &str,
        model: &str,
        fields: &[NoteField],
        tags: &[String],
    ) -> Result<u64> {
        let mut notes = self.notes.lock().unwrap();
        notes.push((deck.to_string(), model.to_string(), fields.to_vec(), tags.to_vec()));
        Ok(notes.len() as u64)
    }
}

#[test]
fn test_template_from_config() {
    let mut config = AnkiConfig::default();
    config.sentence_field = Some("Sentence".to_string());
    let template = CardTemplate::from_config(&config);

    let fields = template.format("run", "to move<br>fast", "I run daily.");
    assert_eq!(
        fields,
        vec![
            NoteField::new("Front", "run"),
            NoteField::new("Back", "to move<br>fast"),
            NoteField::new("Sentence", "I run daily."),
        ]
    );
    assert_eq!(template.tags, ["sieve"]);
}

fn vocab_template() -> CardTemplate {
    let mut config = AnkiConfig::default();
    config.deck = "Vocab".to_string();
    CardTemplate::from_config(&config)
}

#[test]
fn test_custom_field_template() {
    let mut template = vocab_template();
    template.fields[1] = NoteField::new("Back", "<b>{word}</b>: {definition} {unknown}");
    let fields = template.format("run", "to move", "");
    assert_eq!(fields[1].value, "<b>run</b>: to move {unknown}");
}

#[test]
fn test_inserted_text_keeps_braces() {
    let mut template = vocab_template();
    template.fields.push(NoteField::new("Sentence", "{sentence}"));

    let fields = template.format("{definition}", "see {sentence} or {word}", "I run.");
    assert_eq!(fields[0].value, "{definition}");
    assert_eq!(fields[1].value, "see {sentence} or {word}");
    assert_eq!(fields[2].value, "I run.");
}

#[test]
fn test_note_params_shape() {
    let params = note_params(
        "Deck",
        "Basic",
        &[NoteField::new("Front", "run"), NoteField::new("Back", "to move")],
        &["sieve".to_string()],
    );
    assert_eq!(
        params,
        json!({
            "note": {
                "deckName": "Deck",
                "modelName": "Basic",
                "fields": { "Front": "run", "Back": "to move" },
                "tags": ["sieve"]
            }
        })
    );
}

#[test]
fn test_response_into_result() {
    let ok: AnkiResponse<u64> = serde_json::from_str(r#"{"result": 42, "error": null}"#).unwrap();
    assert_eq!(ok.into_result().unwrap(), 42);

    let err: AnkiResponse<u64> =
        serde_json::from_str(r#"{"result": null, "error": "deck was not found"}"#).unwrap();
    let message = err.into_result().unwrap_err().to_string();
    assert!(message.contains("deck was not found"));

    let null: AnkiResponse<u64> = serde_json::from_str(r#"{"result": null, "error": null}"#).unwrap();
    assert!(null.into_result().is_err());
}

#[tokio::test]
async fn test_add_card_formats_fields() {
    let backend = RecordingBackend::default();
    let template = vocab_template();

    let id = add_card(&backend, &template, "run", "line1<br>line2", "")
        .await
        .unwrap();
    assert_eq!(id, 1);

    let notes = backend.notes.lock().unwrap();
    let (deck, model, fields, tags) = &notes[0];
    assert_eq!(deck, "Vocab");
    assert_eq!(model, "Basic");
    assert_eq!(fields[0].value, "run");
    assert_eq!(fields[1].value, "line1<br>line2");
    assert_eq!(tags, &["sieve"]);
}

#[tokio::test]
async fn test_add_card_requires_word() {
    let backend = RecordingBackend::default();
    let template = vocab_template();

    assert!(add_card(&backend, &template, "", "def", "").await.is_err());
    assert!(backend.notes.lock().unwrap().is_empty());
}
