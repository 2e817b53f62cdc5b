//! Averaged-polarity scorer.
//!
//! Unlike the lexicon scorer, which sums weights and clamps, this backend
//! averages the polarity of the subjective tokens it recognizes. A text
//! with one mildly positive word and one mildly negative word therefore
//! lands near zero instead of accumulating.

use crate::tokens::{booster_weight, is_negation, tokenize, NEGATION_WINDOW};

/// Token polarities in `[-1.0, 1.0]`.
///
/// Deliberately coarser than the lexicon table: polarity models care about
/// direction and strength of individual subjective words, not coverage.
const POLARITY: &[(&str, f32)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("fantastic", 0.9),
    ("wonderful", 0.9),
    ("perfect", 1.0),
    ("best", 1.0),
    ("love", 0.8),
    ("loved", 0.8),
    ("like", 0.4),
    ("enjoy", 0.6),
    ("enjoyed", 0.6),
    ("happy", 0.8),
    ("pleased", 0.6),
    ("nice", 0.6),
    ("fine", 0.4),
    ("helpful", 0.6),
    ("easy", 0.4),
    ("delicious", 0.8),
    ("recommend", 0.6),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("worst", -1.0),
    ("hate", -0.8),
    ("hated", -0.8),
    ("poor", -0.6),
    ("disappointing", -0.6),
    ("disappointed", -0.6),
    ("useless", -0.7),
    ("broken", -0.6),
    ("slow", -0.3),
    ("boring", -0.5),
    ("annoying", -0.6),
    ("rude", -0.7),
    ("dirty", -0.5),
    ("ugly", -0.6),
    ("sad", -0.6),
    ("angry", -0.7),
];

/// TextBlob-style polarity scorer: mean polarity of recognized tokens,
/// with the same negation/booster context as the lexicon backend.
/// Stateless; returns `0.0` when no subjective token matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityScorer;

impl PolarityScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Mean polarity in `[-1.0, 1.0]`.
    #[must_use]
    pub fn score(&self, text: &str) -> f32 {
        let tokens = tokenize(text);
        let mut sum = 0.0_f32;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut polarity) = token_polarity(token) else {
                continue;
            };

            if i > 0 {
                if let Some(boost) = booster_weight(&tokens[i - 1]) {
                    polarity = (polarity * boost).clamp(-1.0, 1.0);
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negation(t)) {
                polarity = -polarity;
            }

            sum += polarity;
            matched += 1;
        }

        if matched == 0 {
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = sum / matched as f32;
        mean
    }
}

fn token_polarity(word: &str) -> Option<f32> {
    POLARITY
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, polarity)| polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(PolarityScorer::new().score(""), 0.0);
    }

    #[test]
    fn objective_text_returns_zero() {
        assert_eq!(PolarityScorer::new().score("the package arrived tuesday"), 0.0);
    }

    #[test]
    fn positive_text_scores_positive() {
        let score = PolarityScorer::new().score("what a great product");
        assert!(score > 0.05, "expected positive polarity, got {score}");
    }

    #[test]
    fn negative_text_scores_negative() {
        let score = PolarityScorer::new().score("awful experience");
        assert!(score < -0.05, "expected negative polarity, got {score}");
    }

    #[test]
    fn mixed_text_averages_toward_zero() {
        let scorer = PolarityScorer::new();
        let mixed = scorer.score("great service but awful food");
        let pure = scorer.score("great service");
        assert!(mixed.abs() < pure.abs(), "expected |{mixed}| < |{pure}|");
    }

    #[test]
    fn averaging_does_not_accumulate() {
        let scorer = PolarityScorer::new();
        let single = scorer.score("good");
        let repeated = scorer.score("good good good");
        assert!((single - repeated).abs() < 1e-6);
    }

    #[test]
    fn negation_flips_polarity() {
        let score = PolarityScorer::new().score("not good");
        assert!(score < 0.0, "expected negative polarity, got {score}");
    }

    #[test]
    fn booster_clamps_within_range() {
        let score = PolarityScorer::new().score("extremely excellent");
        assert!(score <= 1.0);
        assert!(score > 0.9);
    }
}
