//! Validate config command implementation
//!
//! Loads the configuration exactly as `lpars` and `ssp` would, without
//! contacting the HMC, and prints a summary with the password redacted.

use super::{report_failure, resolve_config};
use crate::cli::ConnectionArgs;
use crate::config::HmcClientConfig;
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str, connection: &ConnectionArgs) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match resolve_config(config_path, connection) {
            Ok(c) => c,
            Err(e) => return Ok(report_failure(&e, "Configuration validation failed")),
        };

        println!("✅ Configuration is valid");
        println!();
        print!("{}", summary(&config));
        println!();
        Ok(0)
    }
}

fn summary(config: &HmcClientConfig) -> String {
    let password = if config.hmc.password.expose_secret().is_empty() {
        "(not set)"
    } else {
        "********"
    };

    let mut lines = vec![
        "Configuration Summary:".to_string(),
        format!("  Log Level: {}", config.application.log_level),
        format!("  HMC URL: {}", config.hmc.base_url),
        format!("  HMC User: {}", config.hmc.username),
        format!("  HMC Password: {password}"),
        format!("  TLS Verify: {}", config.hmc.tls_verify),
        format!("  Timeout: {}s (connect {}s)", config.hmc.timeout_seconds, config.hmc.connect_timeout_seconds),
        format!("  Audit Memento: {}", config.hmc.audit_memento),
    ];
    if config.logging.local_enabled {
        lines.push(format!(
            "  Log Files: {} ({})",
            config.logging.local_path, config.logging.local_rotation
        ));
    }

    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}
