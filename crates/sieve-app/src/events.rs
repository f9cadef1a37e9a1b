use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use sieve_anki::AnkiConnectClient;
use sieve_config::Config;
use sieve_core::{MultiDefinitionWidget, StaticSourceGroup, WordInput};
use sieve_dictionary::load_dictionaries;
use sieve_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod create_card;
pub mod import_kindle;
pub mod lookup;

use create_card::{check_anki, handle_card_creation};
use import_kindle::handle_kindle_import;
use lookup::{handle_lookup, handle_navigation, send_view};

/// Everything the event loop owns between events
pub struct Session {
    pub widget: MultiDefinitionWidget,
    /// Holds the headword of the shown definition
    pub word: WordInput,
    pub anki_client: Option<AnkiConnectClient>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let word = WordInput::new();
        let mut widget = MultiDefinitionWidget::new(Some(Box::new(word.clone())));
        widget.set_source_group(Box::new(build_source_group(config)));

        Self {
            widget,
            word,
            anki_client: build_anki_client(config),
        }
    }

    /// Pick up changed sources and Anki settings. The shown definitions are kept.
    pub fn reload(&mut self, config: &Config) {
        self.widget
            .set_source_group(Box::new(build_source_group(config)));
        self.anki_client = build_anki_client(config);
    }
}

pub fn build_source_group(config: &Config) -> StaticSourceGroup {
    let loaded = if config.dictionary.enabled {
        load_dictionaries(&config.dictionary.paths)
    } else {
        tracing::warn!("Dictionary disabled, using empty source group");
        Vec::new()
    };

    let group = StaticSourceGroup::from_config(&config.sources, loaded);
    tracing::info!("Source group: {:?}", group.names());
    group
}

fn build_anki_client(config: &Config) -> Option<AnkiConnectClient> {
    if config.anki.enabled {
        Some(AnkiConnectClient::new(config.anki.url.clone()))
    } else {
        None
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = {
        let config = state.config.read().await;
        if let Some(client) = build_anki_client(&config) {
            tokio::spawn(check_anki(
                client,
                config.anki.deck.clone(),
                config.anki.model.clone(),
            ));
        }
        Session::new(&config)
    };

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
        if !handle_events(state.clone(), &mut session, &app_to_ui_tx, event).await? {
            cancel.cancel();
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

/// Returns false once the app should quit
pub async fn handle_events(
    state: Arc<AppState>,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::ConfigChanged => {
            if let Err(e) = state.reload_profile().await {
                tracing::error!("Failed to reload profile: {}", e);
                app_to_ui_tx
                    .send(AppEvent::Status(format!("Reload failed: {e}")))
                    .await?;
                return Ok(true);
            }

            {
                let config = state.config.read().await;
                session.reload(&config);
            }
            tracing::info!("Configuration reloaded");
            app_to_ui_tx
                .send(AppEvent::Status("Settings reloaded".to_string()))
                .await?;
        }
        AppEvent::Lookup(word) => {
            handle_lookup(session, &word, app_to_ui_tx).await?;
        }
        AppEvent::Navigate(action) => {
            handle_navigation(session, action, app_to_ui_tx).await?;
        }
        AppEvent::Reset => {
            session.widget.reset();
            send_view(session, app_to_ui_tx).await?;
        }
        AppEvent::ShowCurrent => {
            send_view(session, app_to_ui_tx).await?;
        }
        AppEvent::ExportCurrent => {
            let exported = session.widget.export_current();
            app_to_ui_tx.send(AppEvent::ShowExport(exported)).await?;
        }
        AppEvent::CreateCard { sentence } => {
            // Anki Card Creation
            handle_card_creation(state, session, sentence, app_to_ui_tx).await?;
        }
        AppEvent::ImportKindle {
            path,
            highlights_only,
        } => {
            handle_kindle_import(state, path, highlights_only, app_to_ui_tx).await?;
        }
        AppEvent::Quit => {
            tracing::info!("Quit requested");
            return Ok(false);
        }
        AppEvent::ShowDefinition { .. } | AppEvent::ShowExport(_) | AppEvent::Status(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(true)
}
