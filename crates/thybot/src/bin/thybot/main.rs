//! `thybot` – terminal front end for the ThyBot assistant.
//!
//! ```bash
//! # Chat (needs GROQ_API_KEY, read from the environment or .env)
//! thybot
//!
//! # Recompute the Thyroid_Impact column of a nutrition table in place
//! thybot tag-impact data/Indian_Food_Nutrition_Processed.csv
//! ```
mod commands;
mod shell;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use thybot::{
    ThyBotClient,
    assistant::ThyBot,
    config::ThyBotConfig,
    groq::{EmbeddingsAdapterBuilder, GroqAdapter, GroqAdapterBuilder},
    index::HashingEmbedder,
    nutrition::{self, NutritionTable},
    provider::EmbeddingProvider,
    search::DuckDuckGoSearch,
    telemetry,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "thybot",
    version,
    about = "Thyroid-health assistant",
    long_about = "Chat about thyroid health with a web search fallback, ask questions about \
                  your own documents and analyse meals against a nutrition table."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Load environment variables from this file instead of `.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive assistant (default)
    Chat,

    /// Tag every dish of a nutrition CSV with its thyroid impact
    TagImpact {
        /// Nutrition table to read
        csv: PathBuf,

        /// Where to write the tagged table (defaults to rewriting CSV)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    if let Err(e) = telemetry::init() {
        eprintln!("logging disabled: {e}");
    }

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => shell::Shell::new(build_thybot()?).run().await,
        Command::TagImpact { csv, output } => {
            let output = output.unwrap_or_else(|| csv.clone());
            let rows = nutrition::retag_csv(&csv, &output)?;
            println!("Thyroid_Impact written for {rows} dishes to {}", output.display());
            Ok(())
        }
    }
}

fn build_thybot() -> anyhow::Result<ThyBot<GroqAdapter>> {
    let config = ThyBotConfig::from_env()?;
    let backend = GroqAdapterBuilder::new_from_env()
        .build()
        .context("set GROQ_API_KEY in the environment or in .env")?;

    let embeddings = EmbeddingsAdapterBuilder::new_from_env();
    let embedder: Arc<dyn EmbeddingProvider> = if embeddings.is_configured() {
        let adapter = embeddings.build()?;
        info!(model = adapter.model(), "using remote embeddings");
        Arc::new(adapter)
    } else {
        info!("THYBOT_EMBEDDINGS_URL not set, using local hashing embeddings");
        Arc::new(HashingEmbedder::default())
    };

    let nutrition = NutritionTable::from_path(&config.nutrition_csv).unwrap_or_else(|e| {
        warn!(
            path = %config.nutrition_csv.display(),
            error = %e,
            "nutrition table unavailable, meal analysis will rely on general knowledge"
        );
        NutritionTable::default()
    });

    info!(model = ?config.model, "starting ThyBot");
    Ok(ThyBot::new(
        ThyBotClient::new(backend, config.model.clone()),
        Arc::new(DuckDuckGoSearch::new()?),
        embedder,
        nutrition,
        config,
    ))
}
