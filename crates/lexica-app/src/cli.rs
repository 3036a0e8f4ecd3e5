use std::str::FromStr;

use clap::Parser;
use lexica_types::{Font, Theme};

/// Dictionary lookup in the terminal: definitions, phonetics, synonyms and
/// pronunciation audio from the Free Dictionary API.
#[derive(Debug, Parser)]
#[command(name = "lexica", version)]
pub struct Cli {
    /// Word to look up; omit to start an interactive session
    pub word: Option<String>,

    /// Look up a random vocabulary-building word
    #[arg(long)]
    pub random: bool,

    /// Print the recent search history
    #[arg(long)]
    pub history: bool,

    /// Clear the recent search history
    #[arg(long)]
    pub clear_history: bool,

    /// Persist a new theme preference (light, dark, sepia, contrast)
    #[arg(long, value_parser = Theme::from_str)]
    pub theme: Option<Theme>,

    /// Persist a new font preference (inter, merriweather, fira, opensans)
    #[arg(long, value_parser = Font::from_str)]
    pub font: Option<Font>,
}

impl Cli {
    /// Any argument at all means run once and exit instead of starting the
    /// interactive session.
    pub fn is_one_shot(&self) -> bool {
        self.word.is_some()
            || self.random
            || self.history
            || self.clear_history
            || self.theme.is_some()
            || self.font.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_is_interactive() {
        let cli = Cli::parse_from(["lexica"]);
        assert!(!cli.is_one_shot());
    }

    #[test]
    fn word_and_flags_are_one_shot() {
        let cli = Cli::parse_from(["lexica", "serendipity"]);
        assert!(cli.is_one_shot());
        assert_eq!(cli.word.as_deref(), Some("serendipity"));

        let cli = Cli::parse_from(["lexica", "--random"]);
        assert!(cli.is_one_shot());

        let cli = Cli::parse_from(["lexica", "--theme", "dark", "--font", "fira"]);
        assert_eq!(cli.theme, Some(Theme::Dark));
        assert_eq!(cli.font, Some(Font::Fira));
    }

    #[test]
    fn invalid_theme_is_rejected() {
        assert!(Cli::try_parse_from(["lexica", "--theme", "neon"]).is_err());
    }
}
