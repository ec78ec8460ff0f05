//! CLI for the api-buddy HTTP API client.

mod raw;
mod render;

use anyhow::Result;
use api_buddy_core::{config, validate_options};
use clap::Parser;

pub use render::{format_user_error, render_request};

/// Top-level CLI for api-buddy.
///
/// Method flags are not declared mutually exclusive here; the validator
/// reports conflicting flags itself.
#[derive(Debug, Parser)]
#[command(name = "api-buddy", version)]
#[command(about = "api-buddy: validate and preview HTTP API requests", long_about = None)]
pub struct Cli {
    /// Send a GET request (the default).
    #[arg(long)]
    pub get: bool,
    /// Send a POST request.
    #[arg(long)]
    pub post: bool,
    /// Send a PATCH request.
    #[arg(long)]
    pub patch: bool,
    /// Send a PUT request.
    #[arg(long)]
    pub put: bool,
    /// Send a DELETE request.
    #[arg(long)]
    pub delete: bool,

    /// API path, e.g. /users/1 (not a full URL).
    #[arg(required_unless_present = "config_path")]
    pub endpoint: Option<String>,

    /// Query params as key=value. Repeat a key to send several values.
    #[arg(value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Request body, passed through untouched.
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    /// Print the config and log locations alongside the request.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the config file path and exit.
    #[arg(long)]
    pub config_path: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if cli.config_path {
            println!("{}", config::config_path()?.display());
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        if cli.verbose {
            eprintln!("config: {}", config::config_path()?.display());
        }

        let raw = cli.to_raw_options();
        let validated = validate_options(&raw)?;
        let preview = validated.preview(&cfg.api_url)?;
        tracing::info!("prepared {}", preview);

        println!("{}", render_request(&validated, &preview, cfg.pretty)?);
        Ok(())
    }
}
