// HMC Client - IBM Hardware Management Console REST client
// Copyright (c) 2025 HMC Client Contributors
// Licensed under the MIT License

//! # HMC Client
//!
//! A client for the REST API of an IBM Hardware Management Console (HMC).
//!
//! ## Overview
//!
//! This library provides:
//! - **Logon** with the HMC's LogonRequest handshake and a cookie-backed session
//! - **Fetching** resource collections and searches under `/rest/api/uom`
//! - **Decoding** the Atom feeds the HMC returns into typed records
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Feed decoding
//! - [`adapters`] - HMC REST integration (session, client facade, paths)
//! - [`domain`] - Records, the decoding contract and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hmc_client::adapters::hmc::HmcClient;
//! use hmc_client::config::load_config;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("hmc.toml")?;
//!     let client = HmcClient::connect(&config.hmc).await?;
//!
//!     for lpar in client.logical_partitions().await? {
//!         println!("{} {} {}", lpar.name, lpar.uuid, lpar.os_version);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Each stage has its own error type ([`domain::AuthError`],
//! [`domain::FetchError`], [`domain::DecodeError`]); all of them convert into
//! [`domain::HmcError`], which maps to a process exit code:
//!
//! - `0` - Success
//! - `2` - Configuration error
//! - `3` - Authentication error
//! - `4` - Fetch or connection error
//! - `5` - Decode or fatal error

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

pub use domain::{HmcError, Result};
