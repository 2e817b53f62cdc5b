//! Single-text analysis command handler.

use sentidash_core::ScorerKind;
use sentidash_sentiment::{classify_one, LexiconScorer, ScorerSet};

/// Classify one text and print the score, label, and (for the lexicon
/// backend) the token-proportion breakdown.
///
/// # Errors
///
/// Returns an error for blank input, an unconfigured backend, or a
/// classifier request failure.
pub(crate) async fn run_analyze(
    scorers: &ScorerSet,
    text: &str,
    model: ScorerKind,
) -> anyhow::Result<()> {
    let scorer = scorers.get(model)?;
    let result = classify_one(text, scorer).await?;

    println!("model:     {model}");
    println!("score:     {:+.4}", result.score);
    println!("sentiment: {}", result.label);

    if model == ScorerKind::Lexicon {
        let breakdown = LexiconScorer::new().breakdown(text);
        println!(
            "tokens:    negative {:.2}% | neutral {:.2}% | positive {:.2}%",
            breakdown.negative * 100.0,
            breakdown.neutral * 100.0,
            breakdown.positive * 100.0
        );
    }

    Ok(())
}
