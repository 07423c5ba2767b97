//! Core logic for the HMC client.
//!
//! # Modules
//!
//! - [`feed`] - Generic Atom feed decoding into typed domain records
//!
//! # Fetch Workflow
//!
//! 1. **Logon**: [`Session::login`](crate::adapters::hmc::Session::login) stores the session cookie
//! 2. **Fetch**: [`Session::fetch`](crate::adapters::hmc::Session::fetch) GETs the raw feed bytes
//! 3. **Decode**: [`feed::decode`] turns the bytes into records
//!
//! # Example
//!
//! ```rust,no_run
//! use hmc_client::adapters::hmc::{paths, Session, SessionOptions};
//! use hmc_client::config::secret_string;
//! use hmc_client::core::feed;
//! use hmc_client::domain::LogicalPartition;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(
//!     "hscroot",
//!     secret_string("abc123".to_string()),
//!     "https://myhmc:12443",
//!     SessionOptions::default(),
//! )?;
//! session.login().await?;
//!
//! let bytes = session
//!     .fetch(&paths::resource_path("LogicalPartition"), paths::FEED_ACCEPT)
//!     .await?;
//! let lpars: Vec<LogicalPartition> = feed::decode(&bytes)?;
//! println!("{} partitions", lpars.len());
//! # Ok(())
//! # }
//! ```

pub mod feed;
