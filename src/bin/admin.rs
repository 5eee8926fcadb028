//! CLI administration tool for shortly.
//!
//! Talks to the Redis store directly, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Check the Redis connection
//! cargo run --bin admin -- check
//!
//! # Create a short code
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Look up a short code
//! cargo run --bin admin -- resolve aZ3kP9qX
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`REDIS_URL` or `REDIS_HOST` and
//! friends, `URL_TTL_SECONDS`), always targeting Redis regardless of
//! `STORE_BACKEND`.

use shortly::application::services::LinkService;
use shortly::config::{Config, mask_connection_string};
use shortly::domain::repositories::UrlStore;
use shortly::infrastructure::storage::RedisStore;
use shortly::utils::url_validator::validate_long_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortly.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the Redis connection
    Check,

    /// Create a short code for a URL
    Shorten {
        /// Absolute http(s) URL to shorten
        url: String,

        /// Base URL to print the full short link under
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Print the URL stored for a short code
    Resolve {
        /// Short code to look up
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let store = RedisStore::connect(&config.redis_url, config.redis_ttl_seconds())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {}",
                mask_connection_string(&config.redis_url)
            )
        })?;

    match cli.command {
        Commands::Check => handle_check(&store, &config).await?,
        Commands::Shorten { url, base_url } => {
            let base_url = base_url.or_else(|| config.public_base_url.clone());
            handle_shorten(store, &url, base_url.as_deref()).await?
        }
        Commands::Resolve { code } => handle_resolve(store, &code).await?,
    }

    Ok(())
}

/// Pings Redis and prints connection details.
async fn handle_check(store: &RedisStore, config: &Config) -> Result<()> {
    println!("{}", "Checking Redis connection...".bright_blue());

    if !store.health_check().await {
        anyhow::bail!("Redis PING failed");
    }

    println!("{}", "Redis connection OK".green().bold());
    println!();
    println!(
        "  URL: {}",
        mask_connection_string(&config.redis_url).bright_black()
    );
    println!(
        "  TTL: {}",
        format!("{}s", store.ttl_seconds()).bright_black()
    );

    Ok(())
}

/// Validates and stores a URL, printing the new code.
async fn handle_shorten(store: RedisStore, url: &str, base_url: Option<&str>) -> Result<()> {
    validate_long_url(url).with_context(|| format!("Rejected URL '{}'", url))?;

    let service = LinkService::new(Arc::new(store));
    let code = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Short code created".green().bold());
    println!();
    println!("  Code: {}", code.bright_yellow().bold());
    println!("  URL:  {}", url.cyan());

    if let Some(base) = base_url {
        println!(
            "  Link: {}",
            service.short_url(base, &code).bright_cyan()
        );
    }

    Ok(())
}

/// Looks up a code and prints the stored URL.
async fn handle_resolve(store: RedisStore, code: &str) -> Result<()> {
    let service = LinkService::new(Arc::new(store));

    match service.resolve(code).await {
        Ok(long_url) => {
            println!("  {} -> {}", code.bright_yellow(), long_url.cyan());
        }
        Err(e) => {
            println!("{}", format!("  {}: {}", code, e).yellow());
        }
    }

    Ok(())
}
