use kanal::AsyncReceiver;
use lexica_types::{AppEvent, DictionaryEntry};

/// Renders app events to the terminal.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        match app_to_ui_rx.recv().await? {
            AppEvent::Searching(term) => println!("looking up \"{term}\"..."),
            AppEvent::ShowResults(entries) => print!("{}", render_entries(&entries)),
            AppEvent::ShowError(message) => println!("{message}"),
            AppEvent::Notice(message) => println!("{message}"),
            AppEvent::ShowHistory(terms) => print!("{}", render_history(&terms)),
            AppEvent::Close => {
                tracing::info!("ui loop stopping");
                return Ok(());
            }
            _ => {}
        }
    }
}

pub fn render_entries(entries: &[DictionaryEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        out.push_str(&format!("\n{}\n", entry.word));
        if let Some(phonetic) = entry.display_phonetic() {
            out.push_str(&format!("{phonetic}\n"));
        }
        if let Some(audio) = entry.playable_audio() {
            out.push_str(&format!("pronunciation: {audio}\n"));
        }

        for meaning in &entry.meanings {
            out.push_str(&format!("\n  [{}]\n", meaning.part_of_speech));
            for (i, definition) in meaning.definitions.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, definition.definition));
                if let Some(example) = &definition.example {
                    out.push_str(&format!("     \"{example}\"\n"));
                }
            }
            if !meaning.synonyms.is_empty() {
                out.push_str(&format!("  synonyms: {}\n", meaning.synonyms.join(", ")));
            }
            if !meaning.antonyms.is_empty() {
                out.push_str(&format!("  antonyms: {}\n", meaning.antonyms.join(", ")));
            }
        }

        if !entry.source_urls.is_empty() {
            out.push_str(&format!("\n  source: {}\n", entry.source_urls.join(", ")));
        }
    }

    out
}

pub fn render_history(terms: &[String]) -> String {
    if terms.is_empty() {
        return "no recent searches\n".to_string();
    }

    let mut out = String::from("recent searches:\n");
    for (i, term) in terms.iter().enumerate() {
        out.push_str(&format!("{:>3}. {term}\n", i + 1));
    }
    out
}
