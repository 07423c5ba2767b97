//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "hmc.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            eprintln!("❌ Configuration file already exists: {}", self.output);
            eprintln!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your HMC address and user", self.output);
                println!("  2. Export HMC_PASSWORD or put it in a .env file");
                println!("  3. Validate configuration: hmc validate-config");
                println!("  4. List partitions: hmc lpars");
                println!();
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ Failed to write configuration file");
                eprintln!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Sample configuration with every option and its default
    fn sample_config() -> &'static str {
        r#"# HMC client configuration
#
# Values of the form ${VAR} are replaced with environment variables.
# HMC_* environment variables override the values below.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[hmc]
# Base URL of the HMC REST API
base_url = "https://myhmc:12443"

# HMC user and password
username = "hscroot"
password = "${HMC_PASSWORD}"

# HMCs ship with a self-signed certificate; enable once a trusted one is installed
tls_verify = false

# Per-request and connect timeouts in seconds
timeout_seconds = 30
connect_timeout_seconds = 10

# Recorded by the HMC in its audit log for each logon
audit_memento = "hmctest"

[logging]
# JSON log files in addition to the console
local_enabled = false
local_path = "./logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
    }
}
