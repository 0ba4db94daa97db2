//! Web server command.

use analyser_core::config::ServerConfig;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Restrict CORS to these origins (repeatable; default allows any)
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    pub allow_origins: Vec<String>,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if !args.allow_origins.is_empty() {
        config.cors.allow_origins = args.allow_origins;
    }

    println!();
    println!(
        "  {} {}",
        "Speed Analyser".cyan().bold(),
        "API Server".bold()
    );
    println!();
    println!(
        "  {}   http://{}:{}/",
        "Health".green(),
        config.host,
        config.port
    );
    println!(
        "  {}  http://{}:{}/analyze",
        "Analyze".green(),
        config.host,
        config.port
    );
    if config.cors.allows_any_origin() {
        println!();
        println!(
            "  {}",
            "CORS allows any origin (development default)".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    analyser_web::run_server(config).await?;

    Ok(())
}
