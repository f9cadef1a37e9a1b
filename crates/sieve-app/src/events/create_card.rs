use std::sync::Arc;

use kanal::AsyncSender;
use sieve_anki::{AnkiConnectClient, CardTemplate};
use sieve_types::AppEvent;

use crate::events::Session;
use crate::state::AppState;

pub async fn handle_card_creation(
    state: Arc<AppState>,
    session: &mut Session,
    sentence: Option<String>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(client) = session.anki_client.as_ref() else {
        tracing::warn!("Anki integration disabled");
        app_to_ui_tx
            .send(AppEvent::Status("Anki integration is disabled".to_string()))
            .await?;
        return Ok(());
    };

    let definition = session.widget.export_current();
    if definition.is_empty() {
        app_to_ui_tx
            .send(AppEvent::Status("No definition selected".to_string()))
            .await?;
        return Ok(());
    }

    let word = session.word.text();
    let (template, sentence) = {
        let config = state.config.read().await;
        let sentence = sentence
            .map(|s| config.misc.format_sentence(&s))
            .unwrap_or_default();
        (CardTemplate::from_config(&config.anki), sentence)
    };

    let status = match sieve_anki::add_card(client, &template, &word, &definition, &sentence).await
    {
        Ok(note_id) => {
            tracing::info!("Added card to Anki: note_id={}", note_id);
            format!("Added '{word}' to {} (note {note_id})", template.deck)
        }
        Err(e) => {
            tracing::error!("Failed to add card to Anki: {}", e);
            format!("Failed to add card: {e}")
        }
    };

    app_to_ui_tx.send(AppEvent::Status(status)).await?;
    Ok(())
}

/// Log whether AnkiConnect is reachable and knows the configured deck and note type
pub async fn check_anki(client: AnkiConnectClient, deck: String, model: String) {
    match client.check_connection().await {
        Ok(version) => tracing::info!("AnkiConnect reachable, version {}", version),
        Err(e) => {
            tracing::warn!("AnkiConnect not reachable: {}", e);
            return;
        }
    }

    match client.deck_names().await {
        Ok(decks) if !decks.contains(&deck) => {
            tracing::warn!("Deck '{}' not found in Anki", deck)
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Failed to list decks: {}", e),
    }

    match client.model_names().await {
        Ok(models) if !models.contains(&model) => {
            tracing::warn!("Note type '{}' not found in Anki", model)
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Failed to list note types: {}", e),
    }
}
