use std::sync::Arc;

use kanal::AsyncSender;
use sieve_import::{IdentityLemmatizer, KindleVocabImporter};
use sieve_types::AppEvent;

use crate::state::AppState;

pub async fn handle_kindle_import(
    state: Arc<AppState>,
    path: String,
    highlights_only: bool,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (language, path, highlights_only) = {
        let config = state.config.read().await;
        let path = if path.is_empty() {
            config.importer.kindle_path.clone().unwrap_or_default()
        } else {
            path
        };
        (
            config.target_language().to_string(),
            path,
            highlights_only || config.importer.highlights_only,
        )
    };

    if path.is_empty() {
        app_to_ui_tx
            .send(AppEvent::Status(
                "No Kindle path given and none configured".to_string(),
            ))
            .await?;
        return Ok(());
    }

    let history = state.history.clone();
    let importer = KindleVocabImporter::new(&path, language);

    // SQLite and file reads block
    let result = tokio::task::spawn_blocking(move || {
        let mut history = history.lock().unwrap_or_else(|e| e.into_inner());
        importer.import(&mut *history, &IdentityLemmatizer)
    })
    .await?;

    let status = match result {
        Ok(summary) => {
            let notes = summary.notes(highlights_only);
            for note in &notes {
                tracing::debug!("[{}] {} ({}): {}", note.date, note.lookup_term, note.book_name, note.sentence);
            }
            format!(
                "Found {} lookups, added {} to lookup history, {} notes ready{}",
                summary.found,
                summary.added,
                notes.len(),
                if highlights_only { " (highlighted only)" } else { "" }
            )
        }
        Err(e) => {
            tracing::error!("Kindle import from {} failed: {}", path, e);
            format!("Import failed: {e}")
        }
    };

    app_to_ui_tx.send(AppEvent::Status(status)).await?;
    Ok(())
}
