// HMC Client - IBM Hardware Management Console REST client
// Copyright (c) 2025 HMC Client Contributors
// Licensed under the MIT License

use clap::Parser;
use hmc_client::cli::{Cli, Commands};
use hmc_client::config::{load_config_unvalidated, LoggingConfig};
use hmc_client::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the file when it loads; errors are reported by the command
    let file_config = load_config_unvalidated(&cli.config).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = match &cli.command {
        Commands::Init(_) | Commands::ValidateConfig(_) => LoggingConfig::default(),
        _ => file_config.map(|c| c.logging).unwrap_or_default(),
    };

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "hmc client starting");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Lpars(args) => args.execute(&cli.config, &cli.connection).await,
        Commands::Ssp(args) => args.execute(&cli.config, &cli.connection).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config, &cli.connection).await,
        Commands::Init(args) => args.execute().await,
    }
}
