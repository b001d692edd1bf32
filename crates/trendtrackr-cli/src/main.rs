mod analyze;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use trendtrackr_sentiment::sources::PayloadKind;

#[derive(Debug, Parser)]
#[command(name = "trendtrackr")]
#[command(about = "Sentiment of news headlines, product reviews, and vendor listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single piece of text
    Score {
        /// Text to score
        text: String,
    },
    /// Score a batch read from saved API payloads and summarise it
    Analyze {
        /// Upstream payload shape
        #[arg(long, value_enum, default_value_t = KindArg::News)]
        kind: KindArg,

        /// Payload file, or directory of `<query-slug>.json` files
        /// [default: TRENDTRACKR_DATA_DIR]
        #[arg(long)]
        input: Option<PathBuf>,

        /// Query to analyse; repeat for several batches
        #[arg(long = "query")]
        queries: Vec<String>,

        /// Use a provider preset's query instead of --query
        #[arg(long, conflicts_with = "queries")]
        provider: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List provider presets
    Providers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    News,
    Amazon,
    G2,
}

impl From<KindArg> for PayloadKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::News => PayloadKind::News,
            KindArg::Amazon => PayloadKind::AmazonProduct,
            KindArg::G2 => PayloadKind::G2Vendors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = trendtrackr_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "loaded configuration");

    match cli.command {
        Commands::Score { text } => analyze::run_score(&text)?,
        Commands::Analyze {
            kind,
            input,
            queries,
            provider,
            format,
        } => {
            let queries = analyze::resolve_queries(queries, provider.as_deref())?;
            let input = input.unwrap_or_else(|| config.data_dir.clone());
            analyze::run_analyze(&config, kind.into(), &input, &queries, format)?;
        }
        Commands::Providers => {
            for preset in trendtrackr_core::PROVIDER_PRESETS {
                if preset.query.is_empty() {
                    println!("{}\t(no query filter)", preset.name);
                } else {
                    println!("{}\t{}", preset.name, preset.query);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
