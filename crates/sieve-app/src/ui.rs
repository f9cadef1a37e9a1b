use std::io::Write;
use std::sync::LazyLock;

use kanal::AsyncReceiver;
use regex::Regex;
use sieve_types::AppEvent;
use tokio_util::sync::CancellationToken;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Terminal rendering of the info label
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// What the terminal shows for one event, `None` for backend-only events
pub fn format_event(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowDefinition {
            counter,
            info,
            text,
        } => {
            let info = strip_tags(info);
            if info.is_empty() {
                Some(format!("[{counter}]"))
            } else {
                Some(format!("[{counter}] {info}\n{text}"))
            }
        }
        AppEvent::ShowExport(export) if export.is_empty() => {
            Some("(nothing to export)".to_string())
        }
        AppEvent::ShowExport(export) => Some(export.clone()),
        AppEvent::Status(message) => Some(message.clone()),
        _ => None,
    }
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => {
                // Print whatever the event loop sent before it stopped
                while let Ok(Some(event)) = app_to_ui_rx.try_recv() {
                    if let Some(output) = format_event(&event) {
                        println!("{output}");
                    }
                }
                break;
            }
        };

        if let Some(output) = format_event(&event) {
            println!("{output}");
            if atty::is(atty::Stream::Stdin) {
                print!("> ");
                let _ = std::io::stdout().flush();
            }
        } else {
            tracing::debug!("[UI] Ignoring event: {:?}", event);
        }
    }

    tracing::info!("[UI] Stopped");
    Ok(())
}
