// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::ffi::OsString;

use anyhow::Context as _;
use clap::Parser;

use super::subcommands::Cli;
use crate::cli_shared::logger;
use crate::rpc::ApiInfo;

pub async fn main<ArgT>(args: impl IntoIterator<Item = ArgT>) -> anyhow::Result<()>
where
    ArgT: Into<OsString> + Clone,
{
    // Capture Cli inputs
    let cli = Cli::parse_from(args);
    logger::setup_minimal_logger();

    let timeout = cli.timeout();
    let Cli { token, cmd, .. } = cli;
    let api = ApiInfo::from_env()?.set_token(token);

    tokio::select! {
        result = cmd.run(api, timeout) => result,
        signal = tokio::signal::ctrl_c() => {
            signal.context("couldn't listen for ctrl-c")?;
            anyhow::bail!("interrupted")
        }
    }
}
