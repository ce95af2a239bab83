// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::io::Write;

use anyhow::Context as _;
use tracing::debug;

use super::accumulator::{FeeContext, accumulate};
use super::input::Target;
use super::query::ChainQuery;
use super::reconcile::{ProjectedFunds, reconcile};
use super::report::ReportWriter;
use crate::actors::miner::termination_fee_rule;
use crate::error::Error;
use crate::shim::{
    address::Address, clock::ChainEpoch, econ::TokenAmount, sector::SectorSize,
};

/// One row of the report: a miner after terminating its sectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceProjection {
    pub epoch: ChainEpoch,
    pub miner: Address,
    pub sector_size: SectorSize,
    pub sector_count: usize,
    pub funds: ProjectedFunds,
    pub penalty: TokenAmount,
    pub pledge_delta: TokenAmount,
}

/// Project the balance of one miner at the current chain head.
///
/// Every read is pinned to the same tipset.
pub async fn project_balance(
    query: &impl ChainQuery,
    target: &Target,
) -> Result<BalanceProjection, Error> {
    let snapshot = query.chain_head().await?;
    let rule = termination_fee_rule(snapshot.network_version)?;
    debug!(
        miner = %target.miner,
        epoch = snapshot.epoch(),
        network_version = %snapshot.network_version,
        ?rule,
        "projecting balance"
    );

    let info = query.miner_info(&target.miner, &snapshot).await?;
    let reward_estimate = query.reward_estimate(&snapshot).await?;
    let power_estimate = query.power_estimate(&snapshot).await?;
    let sectors = query
        .sector_infos(&target.miner, &target.sectors, &snapshot)
        .await?;

    let totals = accumulate(
        &FeeContext {
            rule,
            sector_size: info.sector_size,
            epoch: snapshot.epoch(),
            reward_estimate: &reward_estimate,
            power_estimate: &power_estimate,
        },
        &sectors,
    );

    let record = query.actor_record(&target.miner, &snapshot).await?;
    let state = query.miner_state(&record, &snapshot).await?;
    let funds = reconcile(
        &target.miner,
        &state,
        &record.balance,
        &totals.penalty,
        &totals.pledge_delta,
    );

    Ok(BalanceProjection {
        epoch: snapshot.epoch(),
        miner: target.miner,
        sector_size: info.sector_size,
        sector_count: totals.sector_count,
        funds,
        penalty: totals.penalty,
        pledge_delta: totals.pledge_delta,
    })
}

/// Project every target in turn, writing a row as soon as each is known.
///
/// Stops at the first failure, naming the miner it failed for.
pub async fn write_report<W: Write>(
    query: &impl ChainQuery,
    targets: &[Target],
    report: &mut ReportWriter<W>,
) -> anyhow::Result<()> {
    report.fit_miners(targets.iter().map(|target| &target.miner));
    report.header()?;
    for target in targets {
        let projection = project_balance(query, target)
            .await
            .with_context(|| format!("couldn't project balance of miner {}", target.miner))?;
        report.row(&projection)?;
    }
    Ok(())
}
