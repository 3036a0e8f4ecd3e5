use kanal::AsyncSender;
use lexica_types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

pub const HELP: &str = "commands: :random  :history  :clear  \
:theme <light|dark|sepia|contrast>  :font <inter|merriweather|fira|opensans>  :quit";

/// Reads user lines from stdin and turns them into app events.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("stdin watcher stopping");
                break;
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Some(event) = parse_line(&line) {
                            let closing = matches!(event, AppEvent::Close);
                            event_tx.send(event).await?;
                            if closing {
                                break;
                            }
                        }
                    }
                    None => {
                        // stdin closed
                        event_tx.send(AppEvent::Close).await?;
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Interactive command surface: `:`-prefixed commands, anything else is a
/// lookup term. Blank lines produce nothing.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(command) = line.strip_prefix(':') {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();

        let event = match (name, arg) {
            ("q" | "quit", _) => AppEvent::Close,
            ("random", _) => AppEvent::RandomWord,
            ("history", _) => AppEvent::RequestHistory,
            ("clear", _) => AppEvent::ClearHistory,
            ("help", _) => AppEvent::Notice(HELP.to_string()),
            ("theme", Some(value)) => match value.parse() {
                Ok(theme) => AppEvent::SetTheme(theme),
                Err(e) => AppEvent::ShowError(e.to_string()),
            },
            ("font", Some(value)) => match value.parse() {
                Ok(font) => AppEvent::SetFont(font),
                Err(e) => AppEvent::ShowError(e.to_string()),
            },
            ("theme" | "font", None) => AppEvent::ShowError(format!("usage: :{name} <value>")),
            _ => AppEvent::ShowError(format!("unknown command ':{name}' (:help lists commands)")),
        };
        return Some(event);
    }

    Some(AppEvent::SearchText(line.to_string()))
}

#[cfg(test)]
mod tests {
    use lexica_types::{Font, Theme};

    use super::*;

    #[test]
    fn plain_text_becomes_a_search() {
        match parse_line("  hello world ") {
            Some(AppEvent::SearchText(text)) => assert_eq!(text, "hello world"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn blank_lines_produce_nothing() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t").is_none());
    }

    #[test]
    fn commands_are_recognized() {
        assert!(matches!(parse_line(":quit"), Some(AppEvent::Close)));
        assert!(matches!(parse_line(":q"), Some(AppEvent::Close)));
        assert!(matches!(parse_line(":random"), Some(AppEvent::RandomWord)));
        assert!(matches!(
            parse_line(":history"),
            Some(AppEvent::RequestHistory)
        ));
        assert!(matches!(parse_line(":clear"), Some(AppEvent::ClearHistory)));
    }

    #[test]
    fn theme_and_font_commands_parse_their_argument() {
        assert!(matches!(
            parse_line(":theme dark"),
            Some(AppEvent::SetTheme(Theme::Dark))
        ));
        assert!(matches!(
            parse_line(":font opensans"),
            Some(AppEvent::SetFont(Font::OpenSans))
        ));
        assert!(matches!(
            parse_line(":theme neon"),
            Some(AppEvent::ShowError(_))
        ));
        assert!(matches!(parse_line(":theme"), Some(AppEvent::ShowError(_))));
    }

    #[test]
    fn unknown_commands_surface_an_error() {
        assert!(matches!(
            parse_line(":frobnicate"),
            Some(AppEvent::ShowError(_))
        ));
    }
}
