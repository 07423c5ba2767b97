//! CLI command implementations
//!
//! Each command returns the process exit code. Failures are reported on
//! stderr; stdout only carries command output.

pub mod init;
pub mod lpars;
pub mod ssp;
pub mod validate;

use super::ConnectionArgs;
use crate::config::{load_config_unvalidated, secret_string, HmcClientConfig};
use crate::domain::{HmcError, Result};

/// Load the configuration file (if any), apply command-line overrides and validate
///
/// Flags win over the file and over `HMC_*` overrides.
pub fn resolve_config(config_path: &str, connection: &ConnectionArgs) -> Result<HmcClientConfig> {
    let mut config = load_config_unvalidated(config_path)?;

    if let Some(url) = &connection.url {
        config.hmc.base_url = url.clone();
    }
    if let Some(user) = &connection.user {
        config.hmc.username = user.clone();
    }
    if let Some(password) = &connection.password {
        config.hmc.password = secret_string(password.clone());
    }

    config.validate().map_err(|e| {
        HmcError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Log and print a failure, returning its exit code
pub(crate) fn report_failure(error: &HmcError, context: &str) -> i32 {
    crate::log_error_with_context!(error, context);
    eprintln!("❌ {context}");
    eprintln!("   Error: {error}");
    error.exit_code()
}
