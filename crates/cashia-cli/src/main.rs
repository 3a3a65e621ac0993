mod cli;
mod commands;
mod render;

use anyhow::Result;
use cashia_config::Config;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Could not load config, using defaults: {}", e);
        Config::default()
    });

    match cli.command {
        cli::Commands::Plan { input, format } => commands::plan::handle(&input, format, &config),
        cli::Commands::Overview { input, format } => {
            commands::overview::handle(&input, format, &config)
        }
        cli::Commands::Shell => commands::shell::handle(&config),
        cli::Commands::Init => commands::init::handle(),
        cli::Commands::Completions { shell } => {
            commands::completions(shell);
            Ok(())
        }
    }
}
