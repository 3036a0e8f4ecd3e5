use rand::seq::IndexedRandom;

/// Vocabulary-building words offered by the random action and as
/// did-you-mean hints next to a not-found result.
pub const POPULAR_WORDS: &[&str] = &[
    "serendipity",
    "ephemeral",
    "ubiquitous",
    "eloquent",
    "paradigm",
    "quintessential",
    "mellifluous",
    "cacophony",
    "surreptitious",
    "perspicacious",
    "magnanimous",
    "vicarious",
    "gregarious",
    "fastidious",
    "meticulous",
    "audacious",
    "tenacious",
    "voracious",
    "sagacious",
    "loquacious",
    "ambiguous",
    "superfluous",
    "ostentatious",
    "pretentious",
    "contentious",
    "facetious",
    "capricious",
    "auspicious",
    "propitious",
    "fortuitous",
    "gratuitous",
    "assiduous",
    "innocuous",
    "conspicuous",
    "incongruous",
    "ambivalent",
    "benevolent",
    "malevolent",
    "prevalent",
    "coherent",
    "inherent",
    "resilient",
    "turbulent",
    "subsequent",
    "transcendent",
    "independent",
];

pub fn random_word() -> &'static str {
    let mut rng = rand::rng();
    POPULAR_WORDS.choose(&mut rng).copied().unwrap_or("serendipity")
}

/// Up to 8 popular words containing the query, excluding an exact match.
pub fn suggestions(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.len() < 2 {
        return vec![];
    }

    POPULAR_WORDS
        .iter()
        .filter(|word| word.contains(&query) && **word != query)
        .take(8)
        .copied()
        .collect()
}
