//! Command-line interface parsing for the PeakSquare listing browser
//!
//! Handles the --blog, --refresh, and --api-url flags using clap, and folds
//! them into a `StartupConfig` the application applies at construction time.

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The endpoint override is not an HTTP(S) URL
    #[error("Invalid API URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidApiUrl(String),
}

/// PeakSquare Estates - browse property listings and market insights
#[derive(Parser, Debug)]
#[command(name = "peaksquare")]
#[command(about = "Browse PeakSquare Estates property listings and market insights")]
#[command(version)]
pub struct Cli {
    /// Start in the market-insights (blog) list instead of properties
    #[arg(long)]
    pub blog: bool,

    /// Clear every cached dataset before the initial load
    #[arg(long)]
    pub refresh: bool,

    /// Override the feed endpoint URL
    ///
    /// Useful when pointing the browser at a staging deployment of the
    /// listings sheet.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Whether to start in the blog list once loading finishes
    pub start_in_blog: bool,
    /// Whether to clear all cached datasets before the first load
    pub force_refresh: bool,
    /// Endpoint override, if specified
    pub api_url: Option<String>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the flags applied
    /// * `Err(CliError)` if the endpoint override is not an HTTP(S) URL
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if let Some(ref url) = cli.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CliError::InvalidApiUrl(url.clone()));
            }
        }

        Ok(StartupConfig {
            start_in_blog: cli.blog,
            force_refresh: cli.refresh,
            api_url: cli.api_url.clone(),
        })
    }
}
