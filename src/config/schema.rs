//! Configuration schema types
//!
//! This module defines the configuration structure for the HMC client.

use crate::config::{secret_string, SecretString};
use serde::{Deserialize, Serialize};

/// Main client configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HmcClientConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HMC endpoint and credentials
    #[serde(default)]
    pub hmc: HmcConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HmcClientConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.hmc.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// HMC server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmcConfig {
    /// Base URL of the HMC REST API, e.g. `https://myhmc:12443`
    #[serde(default)]
    pub base_url: String,

    /// HMC user
    #[serde(default)]
    pub username: String,

    /// HMC user password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_password")]
    pub password: SecretString,

    /// TLS certificate verification enabled
    ///
    /// HMCs ship with a self-signed certificate, so verification is off
    /// unless explicitly enabled.
    #[serde(default)]
    pub tls_verify: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TCP/TLS connect timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// Value of the `X-Audit-Memento` header sent at logon
    #[serde(default = "default_audit_memento")]
    pub audit_memento: String,
}

impl HmcConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("hmc.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("hmc.base_url must start with http:// or https://".to_string());
        }

        if self.username.is_empty() {
            return Err("hmc.username cannot be empty".to_string());
        }

        if self.password.expose_secret().is_empty() {
            return Err("hmc.password cannot be empty".to_string());
        }

        if !(1..=3600).contains(&self.timeout_seconds) {
            return Err(format!(
                "hmc.timeout_seconds must be between 1 and 3600, got {}",
                self.timeout_seconds
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err("hmc.connect_timeout_seconds must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for HmcConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: String::new(),
            password: default_password(),
            tls_verify: false,
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            audit_memento: default_audit_memento(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err(
                "logging.local_path cannot be empty when local_enabled = true".to_string(),
            );
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_password() -> SecretString {
    secret_string(String::new())
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_audit_memento() -> String {
    "hmctest".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
