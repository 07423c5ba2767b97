//! HMC client facade
//!
//! Wraps a logged-on [`Session`] and pairs each known resource type with its
//! path and record type.

use super::paths::{self, FEED_ACCEPT, LOGICAL_PARTITION, SHARED_STORAGE_POOL};
use super::session::Session;
use crate::config::HmcConfig;
use crate::core::feed;
use crate::domain::{DomainElement, LogicalPartition, Result, SharedStoragePool};

/// Search field of shared storage pools by name
const STORAGE_POOL_NAME_FIELD: &str = "StoragePoolName";

/// High-level HMC client
///
/// Every query is one GET followed by one decode. Queries run strictly one
/// after the other on the underlying session.
#[derive(Debug)]
pub struct HmcClient {
    session: Session,
}

impl HmcClient {
    /// Wrap an existing session. No logon is performed.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create a session from configuration and log on
    ///
    /// # Errors
    ///
    /// Returns [`HmcError::Configuration`](crate::domain::HmcError::Configuration)
    /// if the session cannot be built, or
    /// [`HmcError::Auth`](crate::domain::HmcError::Auth) if the logon fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hmc_client::adapters::hmc::HmcClient;
    /// use hmc_client::config::load_config;
    ///
    /// # async fn example() -> hmc_client::domain::Result<()> {
    /// let config = load_config("hmc.toml")?;
    /// let client = HmcClient::connect(&config.hmc).await?;
    ///
    /// for lpar in client.logical_partitions().await? {
    ///     println!("{} {}", lpar.name, lpar.uuid);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: &HmcConfig) -> Result<Self> {
        let mut session = Session::from_config(config)?;
        session.login().await?;
        Ok(Self::new(session))
    }

    /// Underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Base URL of the HMC
    pub fn base_url(&self) -> &str {
        self.session.base_url()
    }

    /// All logical partitions known to the HMC, in feed order
    pub async fn logical_partitions(&self) -> Result<Vec<LogicalPartition>> {
        self.list(&paths::resource_path(LOGICAL_PARTITION)).await
    }

    /// Shared storage pools whose name matches `name`, in feed order
    pub async fn search_shared_storage_pools(&self, name: &str) -> Result<Vec<SharedStoragePool>> {
        let path = paths::search_path(SHARED_STORAGE_POOL, STORAGE_POOL_NAME_FIELD, name);
        self.list(&path).await
    }

    /// `UniqueDeviceID` of every shared storage pool matching `name`
    pub async fn shared_storage_pool_uuids(&self, name: &str) -> Result<Vec<String>> {
        let pools = self.search_shared_storage_pools(name).await?;
        Ok(pools.into_iter().map(|pool| pool.uuid).collect())
    }

    async fn list<T: DomainElement>(&self, path: &str) -> Result<Vec<T>> {
        let bytes = self.session.fetch(path, FEED_ACCEPT).await?;
        let records = feed::decode::<T>(&bytes)?;

        tracing::info!(
            resource = T::LOCAL_NAME,
            path = %path,
            count = records.len(),
            "Decoded HMC feed"
        );
        Ok(records)
    }
}
