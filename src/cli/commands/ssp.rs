//! `ssp` command: search shared storage pools by name

use super::{report_failure, resolve_config};
use crate::adapters::hmc::HmcClient;
use crate::cli::{output, ConnectionArgs};
use clap::Args;

/// Arguments for the ssp command
#[derive(Args, Debug)]
pub struct SspArgs {
    /// Storage pool name to search for
    #[arg(short, long)]
    pub name: String,

    /// Print pools as JSON instead of a table
    #[arg(long, conflicts_with = "uuids_only")]
    pub json: bool,

    /// Print only the UUID of each matching pool
    #[arg(long)]
    pub uuids_only: bool,
}

impl SspArgs {
    /// Execute the ssp command
    pub async fn execute(&self, config_path: &str, connection: &ConnectionArgs) -> anyhow::Result<i32> {
        let config = match resolve_config(config_path, connection) {
            Ok(c) => c,
            Err(e) => return Ok(report_failure(&e, "Failed to load configuration")),
        };

        tracing::info!(
            base_url = %config.hmc.base_url,
            name = %self.name,
            "Searching shared storage pools"
        );

        let client = match HmcClient::connect(&config.hmc).await {
            Ok(c) => c,
            Err(e) => return Ok(report_failure(&e, "Failed to log on to HMC")),
        };

        if self.uuids_only {
            let uuids = match client.shared_storage_pool_uuids(&self.name).await {
                Ok(uuids) => uuids,
                Err(e) => return Ok(report_failure(&e, "Failed to search shared storage pools")),
            };
            if uuids.is_empty() {
                tracing::warn!(name = %self.name, "No shared storage pool matched");
            }
            print!("{}", output::uuid_lines(&uuids));
            return Ok(0);
        }

        let pools = match client.search_shared_storage_pools(&self.name).await {
            Ok(pools) => pools,
            Err(e) => return Ok(report_failure(&e, "Failed to search shared storage pools")),
        };

        if pools.is_empty() {
            tracing::warn!(name = %self.name, "No shared storage pool matched");
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&pools)?);
        } else {
            print!("{}", output::ssp_table(&pools));
            print!("{}", output::uuid_lines(pools.iter().map(|pool| &pool.uuid)));
        }

        Ok(0)
    }
}
