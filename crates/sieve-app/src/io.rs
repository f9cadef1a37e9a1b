use std::io::{BufRead, Write};

use kanal::{AsyncReceiver, AsyncSender};
use sieve_types::{AppEvent, NavAction};
use tokio_util::sync::CancellationToken;

pub const HELP: &str = "\
commands:
  lookup <word>          look up a word
  next | prev            move through the definitions
  first | last           jump to the first or last definition
  show                   show the current definition again
  export                 print the current definition as it would be exported
  add [sentence]         send the current definition to Anki
  import [path] [--highlights-only]
                         import lookups from a mounted Kindle
  reset                  clear the current lookup
  reload                 re-read the settings profile
  help                   show this help
  quit                   exit";

/// Turn one input line into an app event. `Err` carries a message for the user.
pub fn parse_command(line: &str) -> Result<AppEvent, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command {
        "lookup" | "l" => {
            if rest.is_empty() {
                return Err("usage: lookup <word>".to_string());
            }
            AppEvent::Lookup(rest.to_string())
        }
        "next" | "n" => AppEvent::Navigate(NavAction::Next),
        "prev" | "previous" | "p" => AppEvent::Navigate(NavAction::Previous),
        "first" => AppEvent::Navigate(NavAction::First),
        "last" => AppEvent::Navigate(NavAction::Last),
        "show" => AppEvent::ShowCurrent,
        "export" => AppEvent::ExportCurrent,
        "add" => AppEvent::CreateCard {
            sentence: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "import" => {
            let (flags, path): (Vec<&str>, Vec<&str>) = rest
                .split_whitespace()
                .partition(|token| *token == "--highlights-only");
            // Empty path means the configured one
            AppEvent::ImportKindle {
                path: path.join(" "),
                highlights_only: !flags.is_empty(),
            }
        }
        "reload" => AppEvent::ConfigChanged,
        "reset" => AppEvent::Reset,
        "quit" | "exit" | "q" => AppEvent::Quit,
        "help" | "?" => return Err(HELP.to_string()),
        "" => return Err(String::new()),
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };

    Ok(event)
}

fn prompt() {
    if atty::is(atty::Stream::Stdin) {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

/// Blocking stdin reads live on their own thread so a pending read never
/// holds up runtime shutdown. The receiver errors once stdin closes.
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (line_tx, line_rx) = kanal::bounded_async(16);
    let line_tx = line_tx.to_sync();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    line_rx
}

/// Reads commands from stdin until EOF, `quit` or cancellation
pub async fn watcher_io(
    cancel: CancellationToken,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader();

    tracing::info!("Starting command reader");
    prompt();

    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = cancel.cancelled() => {
                tracing::info!("Command reader stopping");
                break;
            }
        };

        let Ok(line) = line else {
            tracing::info!("Input closed");
            ui_to_app_tx.send(AppEvent::Quit).await?;
            // The event loop ends the app once it has worked through the queue
            cancel.cancelled().await;
            break;
        };

        match parse_command(&line) {
            Ok(AppEvent::Quit) => {
                ui_to_app_tx.send(AppEvent::Quit).await?;
                cancel.cancelled().await;
                break;
            }
            Ok(event) => ui_to_app_tx.send(event).await?,
            Err(message) if message.is_empty() => prompt(),
            Err(message) => app_to_ui_tx.send(AppEvent::Status(message)).await?,
        }
    }

    Ok(())
}
