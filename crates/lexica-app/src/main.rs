use std::future::Future;
use std::sync::Arc;

use clap::Parser;
use lexica_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod io;
mod state;
mod ui;
mod words;


use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let state = Arc::new(AppState::new(Config::new())?);

    if cli.is_one_shot() {
        return one_shot(&cli, &state).await;
    }

    // Banner only when a human is typing, not when stdin is piped
    if atty::is(atty::Stream::Stdin) {
        let prefs = state.prefs.read().await.preferences();
        println!("lexica — theme: {}, font: {}", prefs.theme, prefs.font);
        println!("type a word to look it up, :help for commands");
    }

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    run(state, shutdown).await
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}

async fn one_shot(cli: &Cli, state: &AppState) -> anyhow::Result<()> {
    if let Some(theme) = cli.theme {
        state.prefs.write().await.set_theme(theme);
        println!("theme set to {theme}");
    }
    if let Some(font) = cli.font {
        state.prefs.write().await.set_font(font);
        println!("font set to {font}");
    }

    if cli.clear_history {
        state.controller.clear_history().await;
        println!("history cleared");
    }
    if cli.history {
        print!("{}", ui::render_history(&state.controller.history().await));
    }

    let term = if cli.random {
        Some(words::random_word().to_string())
    } else {
        cli.word.clone()
    };

    if let Some(term) = term {
        state.controller.submit(&term).await;
        let search = state.controller.state().await;

        if let Some(message) = search.error {
            println!("{message}");
        } else if let Some(entries) = search.data {
            print!("{}", ui::render_entries(&entries));
        }
    }

    Ok(())
}
