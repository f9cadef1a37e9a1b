mod client;
mod template;

#[cfg(test)]
mod tests;

pub use client::AnkiConnectClient;
pub use template::{CardTemplate, NoteField};

use anyhow::Result;

/// Where exported notes go
#[async_trait::async_trait]
pub trait FlashcardBackend: Send + Sync {
    /// Returns the new note id
    async fn add_note(
        &self,
        deck: &str,
        model: &str,
        fields: &[NoteField],
        tags: &[String],
    ) -> Result<u64>;
}

#[async_trait::async_trait]
impl FlashcardBackend for AnkiConnectClient {
    async fn add_note(
        &self,
        deck: &str,
        model: &str,
        fields: &[NoteField],
        tags: &[String],
    ) -> Result<u64> {
        AnkiConnectClient::add_note(self, deck, model, fields, tags).await
    }
}

/// Add a card built from `template` to the backend
pub async fn add_card(
    backend: &dyn FlashcardBackend,
    template: &CardTemplate,
    word: &str,
    definition: &str,
    sentence: &str,
) -> Result<u64> {
    if word.is_empty() {
        anyhow::bail!("Cannot add a card without a word");
    }

    let fields = template.format(word, definition, sentence);
    backend
        .add_note(&template.deck, &template.model, &fields, &template.tags)
        .await
}
