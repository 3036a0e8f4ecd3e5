use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
    Contrast,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
            Theme::Contrast => "contrast",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme '{0}' (expected light, dark, sepia or contrast)")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "sepia" => Ok(Theme::Sepia),
            "contrast" => Ok(Theme::Contrast),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Inter,
    Merriweather,
    Fira,
    OpenSans,
}

impl Font {
    pub fn as_str(&self) -> &'static str {
        match self {
            Font::Inter => "inter",
            Font::Merriweather => "merriweather",
            Font::Fira => "fira",
            Font::OpenSans => "opensans",
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown font '{0}' (expected inter, merriweather, fira or opensans)")]
pub struct ParseFontError(String);

impl FromStr for Font {
    type Err = ParseFontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inter" => Ok(Font::Inter),
            "merriweather" => Ok(Font::Merriweather),
            "fira" => Ok(Font::Fira),
            "opensans" => Ok(Font::OpenSans),
            other => Err(ParseFontError(other.to_string())),
        }
    }
}

/// User display preferences, persisted as a whole record on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub font: Font,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences_are_light_inter() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.font, Font::Inter);
    }

    #[test]
    fn theme_round_trips_through_str() {
        for theme in [Theme::Light, Theme::Dark, Theme::Sepia, Theme::Contrast] {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn font_serializes_lowercase() {
        let json = serde_json::to_string(&Font::OpenSans).unwrap();
        assert_eq!(json, "\"opensans\"");
        assert_eq!(serde_json::from_str::<Font>("\"fira\"").unwrap(), Font::Fira);
    }
}
