//! External system integrations for the HMC client.
//!
//! - [`hmc`] - HMC REST API (logon session, resource feeds)
//!
//! # Example
//!
//! ```rust,no_run
//! use hmc_client::adapters::hmc::HmcClient;
//! use hmc_client::config::{secret_string, HmcConfig};
//!
//! # async fn example() -> hmc_client::domain::Result<()> {
//! let config = HmcConfig {
//!     base_url: "https://myhmc:12443".to_string(),
//!     username: "hscroot".to_string(),
//!     password: secret_string("abc123".to_string()),
//!     ..Default::default()
//! };
//!
//! let client = HmcClient::connect(&config).await?;
//! let pools = client.search_shared_storage_pools("ssp_01").await?;
//! # Ok(())
//! # }
//! ```

pub mod hmc;
