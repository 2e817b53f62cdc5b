//! Backend dispatch and the process-wide scorer handle.

use sentidash_core::{AppConfig, ScorerKind};

use crate::classifier::ClassifierClient;
use crate::error::SentimentError;
use crate::lexicon::LexiconScorer;
use crate::polarity::PolarityScorer;

/// One sentiment scorer backend.
///
/// All variants produce a signed score the pipeline can feed to the same
/// threshold mapping; the classifier variant goes over the network and is
/// the only one that can fail per item.
pub enum Scorer {
    Lexicon(LexiconScorer),
    Polarity(PolarityScorer),
    Classifier(ClassifierClient),
}

impl Scorer {
    #[must_use]
    pub fn kind(&self) -> ScorerKind {
        match self {
            Scorer::Lexicon(_) => ScorerKind::Lexicon,
            Scorer::Polarity(_) => ScorerKind::Polarity,
            Scorer::Classifier(_) => ScorerKind::Classifier,
        }
    }

    /// Score a single text.
    ///
    /// # Errors
    ///
    /// Only the classifier backend can fail here; see
    /// [`ClassifierClient::score_one`].
    pub async fn score_one(&self, text: &str) -> Result<f32, SentimentError> {
        match self {
            Scorer::Lexicon(scorer) => Ok(scorer.score(text)),
            Scorer::Polarity(scorer) => Ok(scorer.score(text)),
            Scorer::Classifier(client) => client.score_one(text).await,
        }
    }

    /// Score a batch of texts, one result per input, in input order.
    ///
    /// Per-item results so a failing row (or classifier chunk) does not
    /// abort the rest of the batch. The in-process backends never fail.
    pub async fn score_batch(&self, texts: &[&str]) -> Vec<Result<f32, SentimentError>> {
        match self {
            Scorer::Lexicon(scorer) => texts.iter().map(|t| Ok(scorer.score(t))).collect(),
            Scorer::Polarity(scorer) => texts.iter().map(|t| Ok(scorer.score(t))).collect(),
            Scorer::Classifier(client) => client.score_batch(texts).await,
        }
    }
}

/// All configured backends, built once at startup and shared read-only.
///
/// The classifier backend is present only when a classifier URL is
/// configured; selecting it otherwise yields
/// [`SentimentError::BackendUnavailable`].
pub struct ScorerSet {
    lexicon: Scorer,
    polarity: Scorer,
    classifier: Option<Scorer>,
}

impl ScorerSet {
    /// Build the scorer set from application config.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the classifier HTTP client
    /// cannot be constructed from the configured URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        let classifier = match &config.classifier_url {
            Some(url) => Some(Scorer::Classifier(ClassifierClient::new(
                url,
                config.classifier_timeout_secs,
            )?)),
            None => {
                tracing::info!("SENTIDASH_CLASSIFIER_URL not set; classifier backend disabled");
                None
            }
        };

        Ok(Self {
            lexicon: Scorer::Lexicon(LexiconScorer::new()),
            polarity: Scorer::Polarity(PolarityScorer::new()),
            classifier,
        })
    }

    /// Look up the scorer for a backend kind.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::BackendUnavailable`] if the classifier
    /// backend was not configured.
    pub fn get(&self, kind: ScorerKind) -> Result<&Scorer, SentimentError> {
        match kind {
            ScorerKind::Lexicon => Ok(&self.lexicon),
            ScorerKind::Polarity => Ok(&self.polarity),
            ScorerKind::Classifier => self
                .classifier
                .as_ref()
                .ok_or(SentimentError::BackendUnavailable(ScorerKind::Classifier)),
        }
    }

    #[must_use]
    pub fn available(&self, kind: ScorerKind) -> bool {
        self.get(kind).is_ok()
    }
}
