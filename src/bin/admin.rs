//! CLI administration tool for snip.
//!
//! Talks to the same store as the server, through the same service, without
//! going over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check the store connection
//! cargo run --bin admin -- store check
//!
//! # Create a short link (prompts for the URL when omitted)
//! cargo run --bin admin -- link create https://example.com --host short.ly
//!
//! # Look up a short link
//! cargo run --bin admin -- link resolve 0f8e4c2a-3b1d-4e6f-9a7c-5d2b8e1f4a60
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URI` (required), `DEV_FLAG` (optional).
//!
//! Links cannot be edited or deleted; they expire on their own.

use snip::application::services::LinkService;
use snip::config::{Config, mask_connection_string};
use snip::domain::entities::LINK_TTL;
use snip::error::AppError;
use snip::infrastructure::store::RedisStore;
use snip::utils::short_url::{Scheme, build_short_url};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing snip.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Short link operations
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Check the store connection
    Check,
}

#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,

        /// Host used in the printed short URL
        #[arg(long, default_value = "localhost:8080")]
        host: String,

        /// Print an http:// link regardless of DEV_FLAG
        #[arg(long)]
        dev: bool,
    },

    /// Show the original URL behind a short identifier
    Resolve {
        /// Short identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let redis_uri = config
        .redis_uri
        .clone()
        .context("REDIS_URI must be set")?;

    let store = RedisStore::connect(&redis_uri)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&redis_uri)))?;
    let service = LinkService::new(Arc::new(store));

    match cli.command {
        Commands::Store { action } => match action {
            StoreAction::Check => check_store(&service, &redis_uri).await,
        },
        Commands::Link { action } => match action {
            LinkAction::Create { url, host, dev } => {
                let scheme = if dev {
                    Scheme::Http
                } else {
                    config.link_scheme()
                };
                create_link(&service, url, &host, scheme).await
            }
            LinkAction::Resolve { id } => resolve_link(&service, &id).await,
        },
    }
}

/// Pings the store and reports the result.
async fn check_store(service: &LinkService, redis_uri: &str) -> Result<()> {
    println!("{}", "Checking store connection...".bright_blue());

    if service.store_healthy().await {
        println!(
            "{} {}",
            "OK".green().bold(),
            mask_connection_string(redis_uri).dimmed()
        );
        Ok(())
    } else {
        anyhow::bail!("store did not answer PING")
    }
}

/// Creates a short link, prompting for the URL when none was given.
async fn create_link(
    service: &LinkService,
    url: Option<String>,
    host: &str,
    scheme: Scheme,
) -> Result<()> {
    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL to shorten").interact_text()?,
    };

    let link = service.shorten(&url).await?;

    println!("{}", "Short link created".green().bold());
    println!("  URL:     {}", link.long_url.cyan());
    println!(
        "  Short:   {}",
        build_short_url(scheme, host, &link.id).bright_yellow().bold()
    );
    println!("  Expires: in {}h", LINK_TTL.as_secs() / 3600);

    Ok(())
}

/// Prints the stored URL, or a notice if the link is missing or expired.
async fn resolve_link(service: &LinkService, id: &str) -> Result<()> {
    match service.resolve(id).await {
        Ok(url) => {
            println!("{} -> {}", id.bright_white(), url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", "Not found (never created or expired)".yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
