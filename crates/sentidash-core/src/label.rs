//! Sentiment labels and the canonical score-to-label mapping.

use serde::{Deserialize, Serialize};

/// Scores strictly above this value are labeled [`SentimentLabel::Positive`].
pub const POSITIVE_THRESHOLD: f32 = 0.05;

/// Scores strictly below this value are labeled [`SentimentLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

/// Discrete sentiment category for a scored text.
///
/// Exactly three values; a pure function of the signed score via
/// [`label_for_score`]. Serialized in lowercase for API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Map a signed sentiment score to its label.
///
/// The rule is the same on every path, single-text and batch:
/// `score > 0.05` is positive, `score < -0.05` is negative, and the
/// closed band `[-0.05, 0.05]` (both endpoints included) is neutral.
#[must_use]
pub fn label_for_score(score: f32) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strongly_positive_score_is_positive() {
        assert_eq!(label_for_score(0.9), SentimentLabel::Positive);
    }

    #[test]
    fn strongly_negative_score_is_negative() {
        assert_eq!(label_for_score(-0.9), SentimentLabel::Negative);
    }

    #[test]
    fn zero_is_neutral() {
        assert_eq!(label_for_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn exact_positive_threshold_is_neutral() {
        assert_eq!(label_for_score(POSITIVE_THRESHOLD), SentimentLabel::Neutral);
    }

    #[test]
    fn exact_negative_threshold_is_neutral() {
        assert_eq!(label_for_score(NEGATIVE_THRESHOLD), SentimentLabel::Neutral);
    }

    #[test]
    fn just_above_threshold_is_positive() {
        assert_eq!(label_for_score(0.050_001), SentimentLabel::Positive);
    }

    #[test]
    fn just_below_threshold_is_negative() {
        assert_eq!(label_for_score(-0.050_001), SentimentLabel::Negative);
    }

    #[test]
    fn label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
