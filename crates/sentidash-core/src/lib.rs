//! Shared vocabulary and configuration for sentidash.
//!
//! Holds the sentiment label type with its canonical threshold mapping,
//! the scorer backend selector, and env-var driven application config.
//! Everything here is dependency-light so every other crate can use it.

pub mod app_config;
pub mod config;
pub mod label;
pub mod model;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use label::{label_for_score, SentimentLabel, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use model::ScorerKind;

/// Errors raised while loading or validating application configuration.
///
/// Every sentidash env var is defaulted or optional, so the only failure
/// mode is a value that is present but unparseable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
