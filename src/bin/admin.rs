//! CLI administration tool for alias-shortener.
//!
//! Operates on the SQLite storage directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a chosen alias (or a generated one)
//! cargo run --bin admin -- url save https://example.com --alias example
//!
//! # Show the record behind an alias
//! cargo run --bin admin -- url get example
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete example
//!
//! # Check the database
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH`: SQLite file path or `sqlite:` URL (default: `./storage/storage.db`)
//! - `ALIAS_LENGTH`: length of generated aliases (default: 6)

use alias_shortener::config;
use alias_shortener::domain::repositories::{HealthProbe, UrlDeleter, UrlSaver};
use alias_shortener::infrastructure::persistence::SqliteStorage;
use alias_shortener::utils::alias::{generate_alias, validate_alias};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storage location (overrides STORAGE_PATH)
    #[arg(short, long, global = true)]
    storage: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage URL records
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL record subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Save a URL
    Save {
        /// Target URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the record behind an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::Config::from_env()?;
    let location = cli.storage.unwrap_or(config.storage_path);

    let storage = SqliteStorage::new(&location)
        .await
        .with_context(|| format!("Failed to open storage at {}", location))?;

    match cli.command {
        Commands::Url { action } => {
            handle_url_action(action, &storage, config.alias_length).await?
        }
        Commands::Db { action } => handle_db_action(action, &storage, &location).await?,
    }

    storage.close().await;

    Ok(())
}

/// Dispatches URL record commands.
async fn handle_url_action(
    action: UrlAction,
    storage: &SqliteStorage,
    alias_length: usize,
) -> Result<()> {
    match action {
        UrlAction::Save { url, alias } => save_url(storage, url, alias, alias_length).await,
        UrlAction::Get { alias } => show_url(storage, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(storage, &alias, yes).await,
    }
}

async fn save_url(
    storage: &SqliteStorage,
    url: String,
    alias: Option<String>,
    alias_length: usize,
) -> Result<()> {
    url::Url::parse(&url).with_context(|| format!("'{}' is not a valid URL", url))?;

    let alias = match alias.filter(|a| !a.is_empty()) {
        Some(alias) => {
            validate_alias(&alias)?;
            alias
        }
        None => generate_alias(alias_length),
    };

    match storage.save_url(&url, &alias).await {
        Ok(id) => {
            println!("{}", "✅ URL saved".green().bold());
            println!("  ID:    {}", id.to_string().bright_black());
            println!("  Alias: {}", alias.cyan());
            println!("  URL:   {}", url.bright_white());
            Ok(())
        }
        Err(e) if e.is_url_exists() => {
            println!("{}", format!("⚠️  Alias '{}' is already taken", alias).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to save URL")),
    }
}

async fn show_url(storage: &SqliteStorage, alias: &str) -> Result<()> {
    match storage.get_record(alias).await {
        Ok(record) => {
            println!("  ID:    {}", record.id.to_string().bright_black());
            println!("  Alias: {}", record.alias.cyan());
            println!("  URL:   {}", record.target_url.bright_white());
            Ok(())
        }
        Err(e) if e.is_url_not_found() => {
            println!("{}", format!("❌ Alias '{}' not found", alias).red());
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to load URL")),
    }
}

/// Deletes an alias after confirmation (default: No).
async fn delete_url(storage: &SqliteStorage, alias: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{}'?", alias))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    storage
        .delete_url(alias)
        .await
        .context("Failed to delete URL")?;

    println!("{}", "✅ Alias deleted".green().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    storage: &SqliteStorage,
    location: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");

            match storage.ping().await {
                Ok(()) => println!("{}", "✅ OK".green().bold()),
                Err(e) => {
                    println!("{}", "❌ FAILED".red().bold());
                    return Err(anyhow::Error::new(e).context("Database check failed"));
                }
            }
        }
        DbAction::Info => {
            let count = storage.count().await.context("Failed to count records")?;

            println!("{}", "🗄️  Database Info".bright_blue().bold());
            println!();
            println!("  Location: {}", location.cyan());
            println!("  Records:  {}", count.to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}
