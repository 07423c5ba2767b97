//! Domain models and types for the HMC client.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Domain records** ([`LogicalPartition`], [`SharedStoragePool`])
//! - **The decoding contract** ([`DomainElement`]) every record type implements
//! - **Error types** ([`HmcError`], [`AuthError`], [`FetchError`], [`DecodeError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Every stage has its own error enum. Fallible crate-level operations return
//! [`Result<T, HmcError>`](Result), into which the stage errors convert with
//! the `?` operator:
//!
//! ```rust
//! use hmc_client::domain::{DecodeError, HmcError, Result};
//!
//! fn example() -> Result<()> {
//!     let stage: std::result::Result<(), DecodeError> = Err(DecodeError::MissingRoot);
//!     stage?;
//!     Ok(())
//! }
//!
//! assert!(matches!(example(), Err(HmcError::Decode(DecodeError::MissingRoot))));
//! ```

pub mod element;
pub mod errors;
pub mod partition;
pub mod result;
pub mod storage_pool;

pub use element::{DomainElement, UOM_NAMESPACE};
pub use errors::{AuthError, DecodeError, FetchError, HmcError};
pub use partition::LogicalPartition;
pub use result::Result;
pub use storage_pool::SharedStoragePool;
