use anyhow::Result;
use clap::{Parser, Subcommand};

use ballot::config::Config;
use ballot::output::terminal;
use ballot::pipeline::{ensemble, inspect, RunOptions};

/// Ballot: rank-fusion voting for seed-guided term expansion.
///
/// Fuses three term-ranking signals (seed-guided topic embeddings, PLM
/// representations, and the context-ensemble ranking) into one
/// reciprocal-rank vote per seed group, then rewrites the topic's seed
/// artifacts with the winners.
#[derive(Parser)]
#[command(name = "ballot", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fuse the ranking signals for one topic and rewrite its seed artifacts
    Fuse {
        /// Dataset directory name under the data root (e.g. sta)
        #[arg(long)]
        dataset: String,

        /// Topic name, selects the topic subdirectory and file prefixes
        #[arg(long)]
        topic: String,

        /// How many terms each signal may vote for (default: 20)
        #[arg(long, default_value = "20")]
        topk: usize,

        /// Fused score a term must exceed to survive (default: 0.3)
        #[arg(long, default_value = "0.3")]
        rank_ens: f64,

        /// Drop stop words from the surviving terms
        #[arg(long)]
        drop_stopwords: bool,
    },

    /// Show what a topic's fusion inputs hold and any fused output
    Inspect {
        /// Dataset directory name under the data root
        #[arg(long)]
        dataset: String,

        /// Topic name
        #[arg(long)]
        topic: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ballot=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fuse {
            dataset,
            topic,
            topk,
            rank_ens,
            drop_stopwords,
        } => {
            let config = Config::load()?;
            let options = RunOptions {
                dataset,
                topic,
                topk,
                threshold: rank_ens,
                drop_stopwords,
            };
            let summary = ensemble::run(&config, &options)?;
            terminal::display_run_summary(&summary);
        }

        Commands::Inspect { dataset, topic } => {
            let config = Config::load()?;
            config.require_data_dir()?;
            inspect::report(&config, &dataset, &topic)?;
        }
    }

    Ok(())
}
