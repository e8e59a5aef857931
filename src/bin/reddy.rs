//! CLI binary for reddy.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reddy::{AppConfig, Provider, ReddyError};

/// Reddy: concurrent web search feeding an LLM prompt.
#[derive(Parser)]
#[command(name = "reddy", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search all configured providers and print the merged results.
    Search {
        /// Query text.
        #[arg(required = true)]
        query: Vec<String>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,

        /// Override the number of results kept.
        #[arg(long)]
        max_results: Option<usize>,

        /// Restrict to these providers, in merge order (google, serpapi, duckduckgo).
        #[arg(long = "provider", value_parser = parse_provider)]
        providers: Vec<Provider>,
    },

    /// Print the context block built from the top results.
    Context {
        /// Query text.
        #[arg(required = true)]
        query: Vec<String>,

        /// Print the full chat payload as JSON instead.
        #[arg(long)]
        messages: bool,
    },

    /// Write a default configuration file.
    InitConfig {
        /// Destination (defaults to the platform config directory).
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path } = &cli.command {
        let path = path.clone().unwrap_or_else(AppConfig::default_config_path);
        AppConfig::default().save_to_file(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_config_path);
    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?
        .with_env_credentials();

    let _log_guard = reddy::logging::init(&config.logging)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        Command::Search {
            query,
            json,
            max_results,
            providers,
        } => run_search(config, &query.join(" "), json, max_results, providers).await,
        Command::Context { query, messages } => run_context(config, &query.join(" "), messages).await,
        Command::InitConfig { .. } => Ok(()),
    }
}

async fn run_search(
    mut config: AppConfig,
    query: &str,
    json: bool,
    max_results: Option<usize>,
    providers: Vec<Provider>,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ReddyError::EmptyQuery.into());
    }

    if let Some(max) = max_results {
        config.search.max_results = max;
    }
    if !providers.is_empty() {
        if config
            .search
            .primary
            .is_some_and(|primary| !providers.contains(&primary))
        {
            config.search.primary = None;
        }
        config.search.providers = providers;
    }

    let results = reddy_search::search(query, &config.search_config()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No search results found.");
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        println!("{}. {} [{}]", i + 1, result.title, result.provider);
        println!("   {}", result.url);
        if !result.snippet.is_empty() {
            println!("   {}", result.snippet);
        }
    }
    Ok(())
}

async fn run_context(config: AppConfig, query: &str, messages: bool) -> anyhow::Result<()> {
    let prepared = reddy::prepare_prompt(query, &config).await?;

    if messages {
        println!("{}", serde_json::to_string_pretty(&prepared.messages)?);
    } else {
        println!("{}", prepared.context);
    }
    Ok(())
}
