//! Configuration management for the HMC client.
//!
//! # Overview
//!
//! The client reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `HMC_*` environment overrides
//! - Default values for optional settings
//! - Validation before any network I/O
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`HmcConfig`] - HMC endpoint, credentials, TLS policy and timeouts
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [hmc]
//! base_url = "https://myhmc:12443"
//! username = "hscroot"
//! password = "${HMC_PASSWORD}"
//! tls_verify = false
//! timeout_seconds = 30
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Validation
//!
//! ```rust,no_run
//! use hmc_client::config::load_config;
//!
//! match load_config("hmc.toml") {
//!     Ok(config) => println!("HMC: {}", config.hmc.base_url),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_unvalidated};
pub use schema::{ApplicationConfig, HmcClientConfig, HmcConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
