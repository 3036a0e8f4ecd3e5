use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexica_types::AppEvent;

use crate::state::AppState;
use crate::words;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("event loop started");

    loop {
        let event = ui_to_app_rx.recv().await?;

        if matches!(event, AppEvent::Close) {
            app_to_ui_tx.send(AppEvent::Close).await?;
            return Ok(());
        }

        handle_event(&state, &app_to_ui_tx, event).await?;
    }
}

async fn handle_event(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::SearchText(text) => {
            handle_search(state, app_to_ui_tx, &text).await?;
        }
        AppEvent::RandomWord => {
            handle_search(state, app_to_ui_tx, words::random_word()).await?;
        }
        AppEvent::SetTheme(theme) => {
            state.prefs.write().await.set_theme(theme);
            app_to_ui_tx
                .send(AppEvent::Notice(format!("theme set to {theme}")))
                .await?;
        }
        AppEvent::SetFont(font) => {
            state.prefs.write().await.set_font(font);
            app_to_ui_tx
                .send(AppEvent::Notice(format!("font set to {font}")))
                .await?;
        }
        AppEvent::RequestHistory => {
            let terms = state.controller.history().await;
            app_to_ui_tx.send(AppEvent::ShowHistory(terms)).await?;
        }
        AppEvent::ClearHistory => {
            state.controller.clear_history().await;
            app_to_ui_tx
                .send(AppEvent::Notice("history cleared".to_string()))
                .await?;
        }
        AppEvent::ShowError(_) | AppEvent::Notice(_) => {
            // Produced by the io watcher for the ui; pass through
            app_to_ui_tx.send(event).await?;
        }
        AppEvent::Searching(_)
        | AppEvent::ShowResults(_)
        | AppEvent::ShowHistory(_)
        | AppEvent::Close => {
            // ui-bound events never originate upstream
        }
    }

    Ok(())
}

async fn handle_search(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    term: &str,
) -> anyhow::Result<()> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    app_to_ui_tx
        .send(AppEvent::Searching(trimmed.to_string()))
        .await?;

    state.controller.submit(trimmed).await;
    let search = state.controller.state().await;

    if let Some(message) = search.error {
        let not_found = message.starts_with("Word not found");
        app_to_ui_tx.send(AppEvent::ShowError(message)).await?;

        if not_found {
            let hints = words::suggestions(trimmed);
            if !hints.is_empty() {
                app_to_ui_tx
                    .send(AppEvent::Notice(format!(
                        "similar words: {}",
                        hints.join(", ")
                    )))
                    .await?;
            }
        }
    } else if let Some(entries) = search.data {
        app_to_ui_tx.send(AppEvent::ShowResults(entries)).await?;
    }

    Ok(())
}
