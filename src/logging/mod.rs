//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Human-readable console output on stderr
//! - Configurable log levels (`RUST_LOG` wins when set)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use hmc_client::logging::init_logging;
//! use hmc_client::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(base_url = "https://myhmc:12443", "Connecting");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log one completed HTTP exchange with the HMC
///
/// # Example
///
/// ```no_run
/// use hmc_client::log_exchange;
///
/// log_exchange!("GET", "https://myhmc:12443/rest/api/uom/LogicalPartition", 200u16);
/// ```
#[macro_export]
macro_rules! log_exchange {
    ($method:expr, $url:expr, $status:expr) => {
        tracing::debug!(
            method = $method,
            url = %$url,
            status = $status,
            "HMC exchange completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use hmc_client::log_error_with_context;
/// use hmc_client::domain::HmcError;
///
/// let error = HmcError::Configuration("hmc.base_url cannot be empty".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
