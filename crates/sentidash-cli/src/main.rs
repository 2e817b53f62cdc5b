mod analyze;
mod batch;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sentidash_core::ScorerKind;
use sentidash_sentiment::ScorerSet;

#[derive(Debug, Parser)]
#[command(name = "sentidash")]
#[command(about = "Sentiment analysis command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single text and print its sentiment label
    Analyze {
        /// Text to classify
        text: String,

        /// Scorer backend: lexicon, polarity, or classifier
        #[arg(long, default_value = "lexicon")]
        model: ScorerKind,
    },
    /// Score every row of a CSV file with a 'text' column
    Batch {
        /// Path to the CSV file
        file: PathBuf,

        /// Scorer backend: lexicon, polarity, or classifier
        #[arg(long, default_value = "lexicon")]
        model: ScorerKind,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = sentidash_core::load_app_config()?;
    let scorers = ScorerSet::from_config(&config)?;

    match cli.command {
        Commands::Analyze { text, model } => analyze::run_analyze(&scorers, &text, model).await,
        Commands::Batch { file, model } => batch::run_batch(&scorers, &file, model).await,
    }
}
