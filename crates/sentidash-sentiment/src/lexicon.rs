//! Word-weight lexicon scorer.

use serde::Serialize;

use crate::tokens::{booster_weight, is_negation, tokenize, NEGATION_WINDOW};

/// General-purpose word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final compound score is clamped to
/// `[-1.0, 1.0]`.
const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("good", 0.3),
    ("great", 0.5),
    ("excellent", 0.6),
    ("amazing", 0.6),
    ("awesome", 0.6),
    ("fantastic", 0.6),
    ("wonderful", 0.6),
    ("perfect", 0.6),
    ("best", 0.5),
    ("better", 0.3),
    ("love", 0.6),
    ("loved", 0.6),
    ("loves", 0.6),
    ("like", 0.2),
    ("liked", 0.2),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("happy", 0.5),
    ("glad", 0.4),
    ("pleased", 0.4),
    ("satisfied", 0.4),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("quality", 0.3),
    ("helpful", 0.4),
    ("friendly", 0.4),
    ("fast", 0.3),
    ("easy", 0.3),
    ("smooth", 0.3),
    ("reliable", 0.4),
    ("impressive", 0.5),
    ("beautiful", 0.5),
    ("nice", 0.3),
    ("fine", 0.2),
    ("works", 0.2),
    ("win", 0.4),
    ("winner", 0.4),
    ("delicious", 0.5),
    ("fresh", 0.3),
    ("superb", 0.6),
    ("brilliant", 0.6),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("horrible", -0.6),
    ("awful", -0.6),
    ("worst", -0.6),
    ("worse", -0.4),
    ("hate", -0.6),
    ("hated", -0.6),
    ("hates", -0.6),
    ("dislike", -0.4),
    ("poor", -0.4),
    ("disappointing", -0.5),
    ("disappointed", -0.5),
    ("useless", -0.5),
    ("broken", -0.5),
    ("break", -0.3),
    ("broke", -0.4),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("slow", -0.3),
    ("expensive", -0.3),
    ("cheap", -0.2),
    ("problem", -0.3),
    ("problems", -0.3),
    ("issue", -0.3),
    ("issues", -0.3),
    ("bug", -0.3),
    ("buggy", -0.4),
    ("crash", -0.5),
    ("crashed", -0.5),
    ("scam", -0.7),
    ("fraud", -0.7),
    ("refund", -0.3),
    ("waste", -0.5),
    ("wasted", -0.5),
    ("annoying", -0.4),
    ("angry", -0.5),
    ("rude", -0.5),
    ("dirty", -0.4),
    ("defective", -0.5),
    ("damaged", -0.4),
    ("unusable", -0.6),
    ("disgusting", -0.7),
    ("ugly", -0.4),
    ("boring", -0.3),
];

/// Positive/negative/neutral token proportions for single-text display.
///
/// Proportions are over all word tokens in the input and sum to 1.0
/// (all zeros for empty input).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LexiconBreakdown {
    pub positive: f32,
    pub negative: f32,
    pub neutral: f32,
    pub compound: f32,
}

/// Lexicon-backed sentiment scorer.
///
/// Splits text into lowercase words, sums matching weights with negation
/// and booster handling, and clamps the compound score to `[-1.0, 1.0]`.
/// Stateless; scoring is a pure function of the input text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compound score in `[-1.0, 1.0]`. Returns `0.0` for empty or
    /// unknown text.
    #[must_use]
    pub fn score(&self, text: &str) -> f32 {
        let tokens = tokenize(text);
        let mut score = 0.0_f32;

        for (i, token) in tokens.iter().enumerate() {
            let Some(weight) = word_weight(token) else {
                continue;
            };
            score += modified_weight(weight, &tokens, i);
        }

        score.clamp(-1.0, 1.0)
    }

    /// Token-level breakdown plus the compound score.
    #[must_use]
    pub fn breakdown(&self, text: &str) -> LexiconBreakdown {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return LexiconBreakdown {
                positive: 0.0,
                negative: 0.0,
                neutral: 0.0,
                compound: 0.0,
            };
        }

        let mut positive = 0usize;
        let mut negative = 0usize;
        for (i, token) in tokens.iter().enumerate() {
            let Some(weight) = word_weight(token) else {
                continue;
            };
            if modified_weight(weight, &tokens, i) > 0.0 {
                positive += 1;
            } else {
                negative += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let total = tokens.len() as f32;
        #[allow(clippy::cast_precision_loss)]
        let (pos, neg) = (positive as f32 / total, negative as f32 / total);

        LexiconBreakdown {
            positive: pos,
            negative: neg,
            neutral: 1.0 - pos - neg,
            compound: self.score(text),
        }
    }
}

fn word_weight(word: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, weight)| weight)
}

/// Apply booster and negation context to a matched word weight.
///
/// A booster directly before the word scales it; a negation within the
/// preceding [`NEGATION_WINDOW`] tokens flips its sign.
fn modified_weight(weight: f32, tokens: &[String], index: usize) -> f32 {
    let mut weight = weight;

    if index > 0 {
        if let Some(boost) = booster_weight(&tokens[index - 1]) {
            weight *= boost;
        }
    }

    let window_start = index.saturating_sub(NEGATION_WINDOW);
    if tokens[window_start..index].iter().any(|t| is_negation(t)) {
        weight = -weight;
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(LexiconScorer::new().score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(LexiconScorer::new().score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(LexiconScorer::new().score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = LexiconScorer::new().score("I love this product");
        assert!(score > 0.05, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = LexiconScorer::new().score("This is terrible and broken");
        assert!(score < -0.05, "expected negative score, got {score}");
    }

    #[test]
    fn negation_flips_sentiment() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("this is good");
        let negated = scorer.score("this is not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0, "expected negated score, got {negated}");
    }

    #[test]
    fn booster_amplifies_sentiment() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("good");
        let boosted = scorer.score("very good");
        assert!(boosted > plain, "expected {boosted} > {plain}");
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let text = "excellent amazing fantastic wonderful perfect love great superb";
        assert_eq!(LexiconScorer::new().score(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "terrible horrible awful worst hate disgusting scam unusable";
        assert_eq!(LexiconScorer::new().score(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = LexiconScorer::new().score("great!");
        assert!(score > 0.0, "expected positive score for 'great!', got {score}");
    }

    #[test]
    fn breakdown_proportions_sum_to_one() {
        let b = LexiconScorer::new().breakdown("great product with a terrible manual");
        let total = b.positive + b.negative + b.neutral;
        assert!((total - 1.0).abs() < 1e-6, "proportions sum to {total}");
        assert!(b.positive > 0.0);
        assert!(b.negative > 0.0);
    }

    #[test]
    fn breakdown_of_empty_text_is_all_zero() {
        let b = LexiconScorer::new().breakdown("");
        assert_eq!(b.positive, 0.0);
        assert_eq!(b.negative, 0.0);
        assert_eq!(b.neutral, 0.0);
        assert_eq!(b.compound, 0.0);
    }
}
