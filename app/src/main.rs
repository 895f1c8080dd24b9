#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, CompareInput, CompareStrategy, InfoStrategy, InitStrategy, MineInput,
    MineStrategy, VersionStrategy,
};
use pathcards_config::Config;
use pathcards_extractor::MinerKind;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "pathcards")]
#[command(about = "Mine pathway state changes and compare interaction cards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify inferred cards against curated cards
    Compare {
        /// Curated cards (JSON array)
        #[arg(short = 'm', long)]
        model: PathBuf,

        /// Inferred cards to annotate (JSON array)
        #[arg(short = 'i', long)]
        inference: PathBuf,

        /// Output file, stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Classify cards in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Mine state changes from pattern matches into a delta report
    Mine {
        /// Precomputed pattern matches (JSON)
        #[arg(long)]
        matches: PathBuf,

        /// Ubiquitous molecule blacklist
        #[arg(short = 'b', long)]
        blacklist: Option<PathBuf>,

        /// Report file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Miners to run, comma separated
        #[arg(long, value_delimiter = ',')]
        miners: Vec<MinerKind>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Err(e) = &loaded {
        if !matches!(cli.command, Commands::Init | Commands::Info | Commands::Version) {
            warn!("Using default configuration: {e}");
        }
    }

    match cli.command {
        Commands::Compare {
            model,
            inference,
            output,
            parallel,
        } => {
            CompareStrategy
                .execute(CompareInput {
                    model,
                    inference,
                    output,
                    parallel,
                    config: config.compare,
                })
                .await
        }
        Commands::Mine {
            matches,
            blacklist,
            output,
            miners,
        } => {
            MineStrategy
                .execute(MineInput {
                    matches,
                    blacklist,
                    output,
                    miners,
                    config: config.mining,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
