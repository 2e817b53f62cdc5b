//! Scorer backend selection.

use serde::{Deserialize, Serialize};

/// Which sentiment scorer backend to run a text through.
///
/// Parsed from CLI flags and API payloads; serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Word-weight lexicon with a compound score in `[-1, 1]`.
    Lexicon,
    /// Averaged token polarity in `[-1, 1]`.
    Polarity,
    /// Remote pretrained text classifier (signed confidence).
    Classifier,
}

impl ScorerKind {
    /// All backends, in display order.
    pub const ALL: [ScorerKind; 3] = [
        ScorerKind::Lexicon,
        ScorerKind::Polarity,
        ScorerKind::Classifier,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScorerKind::Lexicon => "lexicon",
            ScorerKind::Polarity => "polarity",
            ScorerKind::Classifier => "classifier",
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lexicon" => Ok(ScorerKind::Lexicon),
            "polarity" => Ok(ScorerKind::Polarity),
            "classifier" => Ok(ScorerKind::Classifier),
            other => Err(format!(
                "unknown scorer backend '{other}' (expected lexicon, polarity, or classifier)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_known_backends() {
        for kind in ScorerKind::ALL {
            assert_eq!(kind.as_str().parse::<ScorerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Lexicon".parse::<ScorerKind>().unwrap(), ScorerKind::Lexicon);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!("bert".parse::<ScorerKind>().is_err());
    }
}
