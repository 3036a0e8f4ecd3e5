use serde::{Deserialize, Serialize};

/// One headword's full lexical record as returned by the lookup service.
/// Field names follow the service's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

impl DictionaryEntry {
    /// URL of the first phonetic carrying a non-empty audio field.
    /// The service pads `audio` with empty strings for silent variants.
    pub fn playable_audio(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|url| !url.is_empty())
    }

    /// Primary transcription: the top-level `phonetic` field, falling back
    /// to the first phonetic variant that has text.
    pub fn display_phonetic(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .or_else(|| self.phonetics.iter().filter_map(|p| p.text.as_deref()).next())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// One part-of-speech grouping of definitions for an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_phonetics(phonetics: Vec<Phonetic>) -> DictionaryEntry {
        DictionaryEntry {
            word: "hello".into(),
            phonetic: None,
            phonetics,
            meanings: vec![],
            license: None,
            source_urls: vec![],
        }
    }

    #[test]
    fn playable_audio_skips_empty_urls() {
        let entry = entry_with_phonetics(vec![
            Phonetic {
                text: Some("/həˈləʊ/".into()),
                audio: Some(String::new()),
                source_url: None,
                license: None,
            },
            Phonetic {
                text: Some("/həˈloʊ/".into()),
                audio: Some("https://example.org/hello-us.mp3".into()),
                source_url: None,
                license: None,
            },
        ]);

        assert_eq!(
            entry.playable_audio(),
            Some("https://example.org/hello-us.mp3")
        );
    }

    #[test]
    fn playable_audio_none_when_all_missing() {
        let entry = entry_with_phonetics(vec![Phonetic {
            text: Some("/həˈləʊ/".into()),
            audio: None,
            source_url: None,
            license: None,
        }]);

        assert_eq!(entry.playable_audio(), None);
    }

    #[test]
    fn display_phonetic_prefers_top_level_field() {
        let mut entry = entry_with_phonetics(vec![Phonetic {
            text: Some("/variant/".into()),
            audio: None,
            source_url: None,
            license: None,
        }]);
        assert_eq!(entry.display_phonetic(), Some("/variant/"));

        entry.phonetic = Some("/primary/".into());
        assert_eq!(entry.display_phonetic(), Some("/primary/"));
    }
}
