// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use num_traits::Signed as _;
use tracing::{info, warn};

use crate::actors::miner::TerminationFeeRule;
use crate::cli::humantoken::TokenAmountShort as _;
use crate::rpc::types::SectorOnChainInfo;
use crate::shim::{
    clock::ChainEpoch, econ::TokenAmount, sector::SectorSize, smooth::FilterEstimate,
};

/// Everything the fee of one sector depends on, other than the sector itself.
pub struct FeeContext<'a> {
    pub rule: TerminationFeeRule,
    pub sector_size: SectorSize,
    pub epoch: ChainEpoch,
    pub reward_estimate: &'a FilterEstimate,
    pub power_estimate: &'a FilterEstimate,
}

/// Sums over the terminated sectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeTotals {
    /// Termination fees.
    pub penalty: TokenAmount,
    /// Initial pledge released.
    pub pledge_delta: TokenAmount,
    pub sector_count: usize,
}

impl FeeTotals {
    pub fn add(&mut self, ctx: &FeeContext<'_>, sector: &SectorOnChainInfo) {
        let qa_power = ctx.rule.qa_power(ctx.sector_size, sector);
        let fee = ctx.rule.termination_fee(
            sector,
            &qa_power,
            ctx.epoch,
            ctx.reward_estimate,
            ctx.power_estimate,
        );
        info!(
            "sector: {} ExpDayReward: {} cur: {} act: {} sPower: {} fee: {}",
            sector.sector_number,
            sector.expected_day_reward().short(),
            ctx.epoch,
            sector.activation,
            qa_power,
            fee.short(),
        );
        if fee.atto().is_negative() || sector.initial_pledge.atto().is_negative() {
            warn!(
                sector = sector.sector_number,
                %fee,
                initial_pledge = %sector.initial_pledge,
                "negative amount in sector data"
            );
        }
        self.penalty += fee;
        self.pledge_delta += sector.initial_pledge.clone();
        self.sector_count += 1;
    }
}

/// Total fee and released pledge for terminating every sector in `sectors`.
pub fn accumulate<'a>(
    ctx: &FeeContext<'_>,
    sectors: impl IntoIterator<Item = &'a SectorOnChainInfo>,
) -> FeeTotals {
    sectors
        .into_iter()
        .fold(FeeTotals::default(), |mut totals, sector| {
            totals.add(ctx, sector);
            totals
        })
}
