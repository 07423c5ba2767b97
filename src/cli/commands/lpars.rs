//! `lpars` command: list logical partitions

use super::{report_failure, resolve_config};
use crate::adapters::hmc::HmcClient;
use crate::cli::{output, ConnectionArgs};
use clap::Args;

/// Arguments for the lpars command
#[derive(Args, Debug)]
pub struct LparsArgs {
    /// Print partitions as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl LparsArgs {
    /// Execute the lpars command
    pub async fn execute(&self, config_path: &str, connection: &ConnectionArgs) -> anyhow::Result<i32> {
        let config = match resolve_config(config_path, connection) {
            Ok(c) => c,
            Err(e) => return Ok(report_failure(&e, "Failed to load configuration")),
        };

        tracing::info!(base_url = %config.hmc.base_url, "Listing logical partitions");

        let client = match HmcClient::connect(&config.hmc).await {
            Ok(c) => c,
            Err(e) => return Ok(report_failure(&e, "Failed to log on to HMC")),
        };

        let lpars = match client.logical_partitions().await {
            Ok(lpars) => lpars,
            Err(e) => return Ok(report_failure(&e, "Failed to list logical partitions")),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&lpars)?);
        } else {
            print!("{}", output::lpar_table(&lpars));
        }

        Ok(0)
    }
}
