//! CLI command definitions and dispatch.

pub mod cache;

use clap::{Parser, Subcommand};

use doccache_core::config::AppConfig;
use doccache_core::error::AppError;

/// doccache — hash-keyed, fail-open cache for documentation pages
#[derive(Debug, Parser)]
#[command(name = "doccache", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the digest and store key for a cache key
    Hash {
        /// Cache key
        key: String,
    },
    /// Read a cached value
    Get {
        /// Cache key
        key: String,
    },
    /// Cache a JSON value for the fixed TTL
    Set {
        /// Cache key
        key: String,
        /// JSON value to store
        value: String,
    },
    /// Check that the configured store is reachable
    Health,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Hash { key } => {
                cache::hash(key, &config.cache.namespace);
                Ok(())
            }
            Commands::Get { key } => cache::get(key, config).await,
            Commands::Set { key, value } => cache::set(key, value, config).await,
            Commands::Health => cache::health(config).await,
        }
    }
}
