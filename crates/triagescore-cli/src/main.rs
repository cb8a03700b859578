//! Triagescore CLI
//!
//! `score` emits one integer on stdout for a single problem description;
//! `precompute` builds the persisted urgency-level cache over the fixed
//! vocabulary. Logging goes to stderr; stdout carries only the score, which
//! the calling backend parses.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

mod config;

use config::AppConfig;
use triagescore_engine::{PrecomputePipeline, ScoreService, UrgencyScorer};

#[derive(Parser, Debug)]
#[command(name = "triagescore")]
#[command(about = "Urgency scoring for medical problem descriptions", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "triagescore.yaml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one problem description and print the integer urgency level
    Score {
        /// Problem description text
        text: Option<String>,
    },

    /// Precompute the urgency-level cache over the vocabulary
    Precompute {
        /// Artifact path (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Vocabulary file, one phrase per line (overrides the config file)
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Score { text } => {
            // Missing argument: emit the sentinel and fail without ever
            // touching the classifier.
            let Some(text) = text else {
                println!("-1");
                std::process::exit(1);
            };

            let scorer = UrgencyScorer::new(config.label_weights()?);
            let provider = Arc::new(config.classifier.provider());
            let service = ScoreService::new(provider, scorer);

            let wire = service.run_wire(&text).await;
            println!("{wire}");
            std::process::exit(if wire > 0 { 0 } else { 1 });
        }
        Command::Precompute { output, vocabulary } => {
            let scorer = UrgencyScorer::new(config.label_weights()?);
            let provider = config.classifier.provider();

            let output = output.unwrap_or_else(|| config.precompute.output.clone());
            let vocabulary = match vocabulary.or_else(|| config.precompute.vocabulary.clone()) {
                Some(path) => triagescore_engine::load_vocabulary(&path)?,
                None => triagescore_engine::default_vocabulary(),
            };

            let pipeline = PrecomputePipeline::new(scorer, output);
            let summary = pipeline.run(&provider, &vocabulary).await?;
            info!(
                entries = summary.entries,
                failed = summary.failed,
                output = %summary.output.display(),
                "precompute finished"
            );
            Ok(())
        }
    }
}

/// Initialize tracing/logging on stderr
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("triagescore=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("triagescore=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
