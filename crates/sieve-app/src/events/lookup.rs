use kanal::AsyncSender;
use sieve_types::{AppEvent, NavAction};

use crate::events::Session;

pub async fn handle_lookup(
    session: &mut Session,
    word: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let found = session.widget.lookup(word);
    tracing::info!("Lookup '{}': {} definitions", word, found);

    send_view(session, app_to_ui_tx).await?;
    if found == 0 {
        app_to_ui_tx
            .send(AppEvent::Status(format!("No definitions found for '{word}'")))
            .await?;
    }
    Ok(())
}

pub async fn handle_navigation(
    session: &mut Session,
    action: NavAction,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if session.widget.navigate(action).is_none() {
        tracing::debug!("Nothing to navigate ({:?})", action);
        app_to_ui_tx
            .send(AppEvent::Status("Nothing to show, look up a word first".to_string()))
            .await?;
        return Ok(());
    }

    send_view(session, app_to_ui_tx).await
}

/// Push what the widget shows to the UI
pub async fn send_view(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let view = session.widget.view();
    app_to_ui_tx
        .send(AppEvent::ShowDefinition {
            counter: view.counter,
            info: view.info,
            text: view.text,
        })
        .await?;
    Ok(())
}
