//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the HMC client using clap.

pub mod commands;
pub mod output;

use clap::{Args, Parser, Subcommand};

/// hmc - query an IBM Hardware Management Console over its REST API
#[derive(Parser, Debug)]
#[command(name = "hmc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (optional when --url, --user and --password are given)
    #[arg(short, long, default_value = "hmc.toml", env = "HMC_CONFIG", global = true)]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HMC_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings that override the configuration file
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// HMC base URL, e.g. https://myhmc:12443
    #[arg(long, env = "HMC_URL", global = true)]
    pub url: Option<String>,

    /// HMC user
    #[arg(long, env = "HMC_USER", global = true)]
    pub user: Option<String>,

    /// HMC password
    #[arg(long, env = "HMC_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List logical partitions
    Lpars(commands::lpars::LparsArgs),

    /// Search shared storage pools by name and print their UUIDs
    Ssp(commands::ssp::SspArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lpars() {
        let cli = Cli::parse_from(["hmc", "lpars"]);
        assert_eq!(cli.config, "hmc.toml");
        assert!(matches!(cli.command, Commands::Lpars(ref args) if !args.json));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["hmc", "--config", "custom.toml", "lpars"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["hmc", "--log-level", "debug", "lpars"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_connection_after_subcommand() {
        let cli = Cli::parse_from([
            "hmc",
            "lpars",
            "--url",
            "https://myhmc:12443",
            "--user",
            "hscroot",
            "--password",
            "abc123",
        ]);
        assert_eq!(cli.connection.url.as_deref(), Some("https://myhmc:12443"));
        assert_eq!(cli.connection.user.as_deref(), Some("hscroot"));
        assert_eq!(cli.connection.password.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cli_parse_ssp() {
        let cli = Cli::parse_from(["hmc", "ssp", "--name", "ssp_01", "--uuids-only"]);
        match cli.command {
            Commands::Ssp(args) => {
                assert_eq!(args.name, "ssp_01");
                assert!(args.uuids_only);
                assert!(!args.json);
            }
            other => panic!("Expected ssp command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_ssp_requires_name() {
        assert!(Cli::try_parse_from(["hmc", "ssp"]).is_err());
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["hmc", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["hmc", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
