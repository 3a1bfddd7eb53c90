use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use lexa_config::Config;
use lexa_core::workflow::{SearchState, SearchWorkflow};
use lexa_dict::DictApiClient;
use lexa_store::{PrefKey, PreferenceStore};
use lexa_types::{FontChoice, Theme};
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod audio;
mod bridge;
mod controller;
mod events;
mod io;
mod render;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;
use self::ui::{DirectSurface, TerminalSurface};

#[derive(Parser)]
#[command(name = "lexa", about = "Dictionary lookup with persistent theme and font preferences")]
struct Args {
    /// Look this word up, print the result, and exit.
    word: Option<String>,

    /// Path to a JSON config profile.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("failed to load config profile {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Config::new(),
    };

    let state = Arc::new(AppState::new(config));

    if let Some(word) = args.word {
        std::process::exit(run_once(state, &word).await);
    }

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    run(state, shutdown).await;
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = shutdown => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
}

/// One-shot mode: same workflow, rendering straight to the terminal.
async fn run_once(state: Arc<AppState>, word: &str) -> i32 {
    let (api, ui) = {
        let config = state.config.read().await;
        (config.api.clone(), config.ui.clone())
    };

    let client = match DictApiClient::new(api.base_url, Duration::from_secs(api.timeout_seconds)) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("cannot build lookup client: {e}");
            return 1;
        }
    };

    let theme = state
        .prefs
        .get(PrefKey::Theme)
        .map(|v| Theme::parse(&v))
        .unwrap_or_default();

    let font = match (
        state.prefs.get(PrefKey::FontName),
        state.prefs.get(PrefKey::FontFamily),
    ) {
        (Some(name), Some(family)) => FontChoice { name, family },
        _ => ui.fonts.first().cloned().unwrap_or(FontChoice {
            name: "Default".to_string(),
            family: ui.default_family.clone(),
        }),
    };

    let surface = DirectSurface::new(TerminalSurface::new(
        theme,
        font,
        render::stdout_styled(ui.plain),
    ));
    let mut workflow = SearchWorkflow::new(client, surface, state.prefs.clone());

    if let Err(e) = workflow.submit(word).await {
        tracing::error!("lookup failed: {e}");
        return 1;
    }

    if workflow.state() == SearchState::Rendered { 0 } else { 1 }
}
