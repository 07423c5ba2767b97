//! HMC REST API adapter
//!
//! - [`session`] - logon handshake, cookie-backed session and raw GETs
//! - [`client`] - typed queries for the known resource types
//! - [`paths`] - endpoint paths, media types and search path construction

pub mod client;
pub mod paths;
pub mod session;

pub use client::HmcClient;
pub use session::{Session, SessionOptions};
