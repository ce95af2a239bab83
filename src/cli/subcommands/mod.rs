// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod balance_cmd;

use std::time::Duration;

use clap::Parser;

pub(super) use self::balance_cmd::BalanceCommand;
use crate::rpc::{ApiInfo, DEFAULT_TIMEOUT};

/// CLI structure generated when interacting with the `terminate-all` binary
#[derive(Parser)]
#[command(name = "terminate-all", author = env!("CARGO_PKG_AUTHORS"), version, about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Client JWT token to use for JSON-RPC authentication, overriding the
    /// one in `FULLNODE_API_INFO`
    #[arg(short, long)]
    pub token: Option<String>,
    /// Timeout for each JSON-RPC request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
    #[command(subcommand)]
    pub cmd: Subcommand,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// `terminate-all` sub-commands available.
#[derive(clap::Subcommand, Debug)]
pub enum Subcommand {
    /// Project miner balances as if all their sectors were terminated now
    Balance(BalanceCommand),
}

impl Subcommand {
    pub async fn run(self, api: ApiInfo, timeout: Duration) -> anyhow::Result<()> {
        match self {
            Self::Balance(cmd) => cmd.run(api, timeout).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_precede_the_subcommand() {
        let cli = Cli::try_parse_from([
            "terminate-all",
            "--token",
            "jwt",
            "--timeout",
            "5",
            "balance",
            "--actor",
            "f01000",
        ])
        .unwrap();
        assert_eq!(cli.token.as_deref(), Some("jwt"));
        assert_eq!(cli.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn default_timeout() {
        let cli = Cli::try_parse_from(["terminate-all", "balance", "--actor", "f01000"]).unwrap();
        assert_eq!(cli.timeout(), DEFAULT_TIMEOUT);
    }
}
