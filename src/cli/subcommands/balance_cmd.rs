// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::rpc::{self, ApiInfo, prelude::*};
use crate::shim::address::{CurrentNetwork, Network};
use crate::terminate::{InputSpec, NodeQuery, ReportWriter, write_report};

#[derive(Debug, clap::Args)]
pub struct BalanceCommand {
    /// Miner to project, e.g. `f01000`
    #[arg(long)]
    actor: Option<String>,
    /// File with one miner address per line
    #[arg(long)]
    miners_path: Option<PathBuf>,
    /// Comma-separated sector numbers to terminate, instead of all active sectors
    #[arg(long)]
    sectors: Option<String>,
    /// File with one sector number per line
    #[arg(long)]
    sectors_path: Option<PathBuf>,
}

impl BalanceCommand {
    fn input(&self) -> InputSpec {
        InputSpec {
            actor: self.actor.clone(),
            miners_path: self.miners_path.clone(),
            sectors: self.sectors.clone(),
            sectors_path: self.sectors_path.clone(),
        }
    }

    pub async fn run(self, api: ApiInfo, timeout: Duration) -> anyhow::Result<()> {
        let targets = self.input().resolve()?;

        let client = rpc::Client::connect(&api, timeout).await?;
        info!("connected to {}", client.url());
        let network = StateNetworkName::call(&client, ()).await?;
        if network != "mainnet" {
            CurrentNetwork::set_global(Network::Testnet);
        }

        let query = NodeQuery::new(client);
        let mut report = ReportWriter::new(std::io::stdout().lock());
        write_report(&query, &targets, &mut report).await
    }
}
