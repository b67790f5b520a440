//! tiercache CLI Client
//!
//! Command-line interface for inspecting and invalidating cache entries.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tiercache::{CacheEntry, CacheIdentifier, Client, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// tiercache CLI
#[derive(Parser, Debug)]
#[command(name = "tiercache-cli")]
#[command(about = "CLI for the multi-level cache service")]
#[command(version)]
struct Args {
    /// Base URL of the cache service
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    /// Gzip request bodies of at least this many bytes (0 disables)
    #[arg(short, long, default_value = "0")]
    gzip_threshold: usize,

    /// Timeout per operation in milliseconds
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch one or more keys from a cache
    Get {
        /// Cache name
        cache: String,

        /// Keys to fetch
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Store a JSON value under a key
    Put {
        /// Cache name
        cache: String,

        /// The key to set
        key: String,

        /// The value, as JSON
        value: String,
    },

    /// Evict one or more keys from a cache
    Evict {
        /// Cache name
        cache: String,

        /// Keys to evict
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tiercache=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> tiercache::Result<()> {
    let config = Config::builder()
        .base_url(&args.url)
        .gzip_threshold(args.gzip_threshold)
        .timeout_ms(args.timeout_ms)
        .build()?;
    let client = Client::with_config(config, reqwest::Client::new());

    match args.command {
        Commands::Get { cache, keys } => {
            let ids = identifiers(&cache, keys);
            for hit in client.fetch::<Value>(&ids).await? {
                let found = hit.is_found();
                let line = serde_json::json!({
                    "cache": hit.cache_name,
                    "key": hit.key,
                    "found": found,
                    "value": hit.value,
                });
                println!("{}", line);
            }
        }
        Commands::Put { cache, key, value } => {
            let value: Value = serde_json::from_str(&value)?;
            client.store(&[CacheEntry::new(cache, key, value)]).await?;
            println!("OK");
        }
        Commands::Evict { cache, keys } => {
            let ids = identifiers(&cache, keys);
            client.evict(&ids).await?;
            println!("OK");
        }
    }

    Ok(())
}

fn identifiers(cache: &str, keys: Vec<String>) -> Vec<CacheIdentifier> {
    keys.into_iter()
        .map(|key| CacheIdentifier::new(cache, key))
        .collect()
}
