//! Shared tokenization and modifier word tables for the in-process scorers.

/// Words that flip the sign of a sentiment word within [`NEGATION_WINDOW`].
pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "cant", "dont", "doesnt", "didnt",
    "isnt", "wasnt", "wont", "wouldnt", "shouldnt", "couldnt", "aint",
];

/// Intensity boosters applied to the next sentiment word.
pub(crate) const BOOSTERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("so", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
    ("hardly", 0.6),
];

/// How many tokens back a negation still applies.
pub(crate) const NEGATION_WINDOW: usize = 3;

/// Split text into lowercase word tokens, stripping non-alphabetic edges.
///
/// `"Great!"` tokenizes to `great`; tokens that are all punctuation are
/// dropped. Contractions lose their apostrophe (`don't` becomes `dont`),
/// which is what [`NEGATIONS`] is keyed on.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

pub(crate) fn booster_weight(word: &str) -> Option<f32> {
    BOOSTERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, weight)| weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(tokenize("Great! Stuff."), vec!["great", "stuff"]);
    }

    #[test]
    fn tokenize_drops_pure_punctuation() {
        assert_eq!(tokenize("good -- bad"), vec!["good", "bad"]);
    }

    #[test]
    fn tokenize_collapses_contractions() {
        assert_eq!(tokenize("don't"), vec!["dont"]);
        assert!(is_negation("dont"));
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }
}
