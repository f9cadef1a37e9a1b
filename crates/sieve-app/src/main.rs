use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::import_kindle::handle_kindle_import;
use self::profile::ProfileStore;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "sieve", version, about = "Look up words across dictionaries and send them to Anki")]
struct Cli {
    /// Profile to load from the config directory
    #[arg(short, long, default_value = "main")]
    profile: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import vocabulary lookups from a mounted Kindle and exit
    ImportKindle {
        /// Kindle mount point, defaults to the configured one
        path: Option<String>,
        /// Only keep words that were also highlighted
        #[arg(long)]
        highlights_only: bool,
    },
    /// Create a profile from the main one and exit
    NewProfile { name: String },
    /// Delete every profile and start over with defaults
    ResetSettings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = ProfileStore::new_default()?;
    if let Some(Command::ResetSettings) = cli.command {
        store.delete_user_data()?;
        store.init_user_config()?;
        println!("Settings reset in {}", store.root().display());
        return Ok(());
    }

    store.init_user_config()?;
    if let Some(Command::NewProfile { name }) = &cli.command {
        let file = store.add_profile_from_default(name)?;
        println!("Created profile {}", file.display());
        return Ok(());
    }

    let config = store.load_user_profile(&cli.profile)?;
    tracing::info!("Loaded profile '{}' from {}", cli.profile, store.root().display());

    let state = Arc::new(AppState::new(config).with_profile(store, cli.profile));

    if let Some(Command::ImportKindle {
        path,
        highlights_only,
    }) = cli.command
    {
        return run_import(state, path.unwrap_or_default(), highlights_only).await;
    }

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::warn!("Task exited with error during shutdown: {e}");
        }
    }

    Ok(())
}

/// One-shot import without the interactive loop
async fn run_import(state: Arc<AppState>, path: String, highlights_only: bool) -> anyhow::Result<()> {
    let (tx, rx) = kanal::bounded_async(4);
    handle_kindle_import(state, path, highlights_only, &tx).await?;
    drop(tx);

    while let Ok(event) = rx.recv().await {
        if let Some(output) = ui::format_event(&event) {
            println!("{output}");
        }
    }
    Ok(())
}
