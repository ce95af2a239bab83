// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Sector termination fees, as each actors release computes them.
//!
//! Sector power and fees come from `fil_actor_miner_state::vN`. Inputs are
//! converted to the `fvm_shared` release each version is compiled against,
//! and fees are converted back.

use crate::actors::{MAX_ACTOR_VERSION, MIN_ACTOR_VERSION};
use crate::error::Error;
use crate::rpc::types::SectorOnChainInfo;
use crate::shim::actors::convert::{
    from_filter_estimate_v3_to_v2, from_filter_estimate_v3_to_v14,
    from_filter_estimate_v3_to_v15, from_filter_estimate_v3_to_v16,
    from_filter_estimate_v3_to_v17, from_sector_size_v3_to_v2, from_sector_size_v3_to_v4,
    from_token_v2_to_v3, from_token_v3_to_v2, from_token_v3_to_v4, from_token_v4_to_v3,
};
use crate::shim::{
    clock::ChainEpoch,
    econ::TokenAmount,
    sector::{SectorSize, StoragePower},
    smooth::FilterEstimate,
    version::{ActorVersion, NetworkVersion},
};

/// The termination fee formula of one actors release.
///
/// - v8 to v11 measure a sector's age and power from its activation.
/// - v12 to v15 measure them from the power-base epoch, the time before it
///   counting as the age of a replaced sector.
/// - v16 onwards charge a share of the initial pledge, floored by the
///   continued fault fee (FIP-0098).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationFeeRule {
    V8,
    V9,
    V10,
    V11,
    V12,
    V13,
    V14,
    V15,
    V16,
    V17,
}

/// Pick the termination fee rule in force at `network_version`.
pub fn termination_fee_rule(network_version: NetworkVersion) -> Result<TerminationFeeRule, Error> {
    let actor_version = network_version.actor_version();
    TerminationFeeRule::from_actor_version(actor_version).ok_or(
        Error::UnsupportedNetworkVersion {
            network_version,
            actor_version,
        },
    )
}

/// Build the `vN::SectorOnChainInfo` that `vN::qa_power_for_sector` reads.
macro_rules! qa_power_for_sector {
    ($v:ident, $size:expr, $sector:expr $(, $field:ident: $value:expr)*) => {{
        let sector: &SectorOnChainInfo = $sector;
        fil_actor_miner_state::$v::qa_power_for_sector(
            $size,
            &fil_actor_miner_state::$v::SectorOnChainInfo {
                activation: sector.activation,
                expiration: sector.expiration,
                deal_weight: sector.deal_weight.clone(),
                verified_deal_weight: sector.verified_deal_weight.clone(),
                $($field: $value,)*
                ..Default::default()
            },
        )
    }};
}

/// Fee before FIP-0098: twenty days of expected reward at activation, plus
/// half a day's reward per day of age, floored by the undeclared fault penalty.
macro_rules! reward_based_fee {
    ($v:ident, $to_token:path, $from_token:path, $to_estimate:path, $args:expr) => {{
        let RewardBasedFee {
            day_reward,
            sector_age,
            storage_pledge,
            qa_power,
            reward_estimate,
            power_estimate,
            replaced_day_reward,
            replaced_sector_age,
        } = $args;
        $from_token(&fil_actor_miner_state::$v::pledge_penalty_for_termination(
            &$to_token(&day_reward),
            sector_age,
            &$to_token(&storage_pledge),
            &$to_estimate(power_estimate),
            qa_power,
            &$to_estimate(reward_estimate),
            &$to_token(&replaced_day_reward),
            replaced_sector_age,
        ))
    }};
}

/// FIP-0098 fee: a share of the initial pledge, floored by the continued fault fee.
macro_rules! pledge_based_fee {
    ($v:ident, $to_estimate:path, $args:expr) => {{
        let PledgeBasedFee {
            initial_pledge,
            sector_age,
            qa_power,
            reward_estimate,
            power_estimate,
        } = $args;
        let fault_fee = fil_actor_miner_state::$v::pledge_penalty_for_continued_fault(
            &$to_estimate(reward_estimate),
            &$to_estimate(power_estimate),
            qa_power,
        );
        from_token_v4_to_v3(&fil_actor_miner_state::$v::pledge_penalty_for_termination(
            &from_token_v3_to_v4(initial_pledge),
            sector_age,
            &fault_fee,
        ))
    }};
}

struct RewardBasedFee<'a> {
    day_reward: TokenAmount,
    sector_age: ChainEpoch,
    storage_pledge: TokenAmount,
    qa_power: &'a StoragePower,
    reward_estimate: &'a FilterEstimate,
    power_estimate: &'a FilterEstimate,
    replaced_day_reward: TokenAmount,
    replaced_sector_age: ChainEpoch,
}

struct PledgeBasedFee<'a> {
    initial_pledge: &'a TokenAmount,
    sector_age: ChainEpoch,
    qa_power: &'a StoragePower,
    reward_estimate: &'a FilterEstimate,
    power_estimate: &'a FilterEstimate,
}

impl TerminationFeeRule {
    pub fn from_actor_version(version: ActorVersion) -> Option<Self> {
        use TerminationFeeRule::*;
        if version < MIN_ACTOR_VERSION || version > MAX_ACTOR_VERSION {
            return None;
        }
        Some(match version.0 {
            8 => V8,
            9 => V9,
            10 => V10,
            11 => V11,
            12 => V12,
            13 => V13,
            14 => V14,
            15 => V15,
            16 => V16,
            _ => V17,
        })
    }

    pub fn actor_version(self) -> ActorVersion {
        ActorVersion(match self {
            Self::V8 => 8,
            Self::V9 => 9,
            Self::V10 => 10,
            Self::V11 => 11,
            Self::V12 => 12,
            Self::V13 => 13,
            Self::V14 => 14,
            Self::V15 => 15,
            Self::V16 => 16,
            Self::V17 => 17,
        })
    }

    /// The epoch a sector's power is measured from.
    fn power_start(self, sector: &SectorOnChainInfo) -> ChainEpoch {
        match self {
            Self::V8 | Self::V9 | Self::V10 | Self::V11 => sector.activation,
            _ => sector.power_base_epoch(),
        }
    }

    /// Quality-adjusted power of `sector`, weighted over its remaining committed duration.
    ///
    /// A sector with no committed duration left has its raw size as power.
    pub fn qa_power(self, sector_size: SectorSize, sector: &SectorOnChainInfo) -> StoragePower {
        if sector.expiration <= self.power_start(sector) {
            return StoragePower::from(sector_size as u64);
        }
        let v2_size = || from_sector_size_v3_to_v2(sector_size);
        let v4_size = || from_sector_size_v3_to_v4(sector_size);
        let power_base_epoch = sector.power_base_epoch();
        match self {
            Self::V8 => qa_power_for_sector!(v8, v2_size(), sector),
            Self::V9 => qa_power_for_sector!(v9, v2_size(), sector),
            Self::V10 => qa_power_for_sector!(v10, sector_size, sector),
            Self::V11 => qa_power_for_sector!(v11, sector_size, sector),
            Self::V12 => qa_power_for_sector!(v12, v4_size(), sector, power_base_epoch: power_base_epoch),
            Self::V13 => qa_power_for_sector!(v13, v4_size(), sector, power_base_epoch: power_base_epoch),
            Self::V14 => qa_power_for_sector!(v14, v4_size(), sector, power_base_epoch: power_base_epoch),
            Self::V15 => qa_power_for_sector!(v15, v4_size(), sector, power_base_epoch: power_base_epoch),
            Self::V16 => qa_power_for_sector!(v16, v4_size(), sector, power_base_epoch: power_base_epoch),
            Self::V17 => qa_power_for_sector!(v17, v4_size(), sector, power_base_epoch: power_base_epoch),
        }
    }

    /// Fee for terminating `sector` at `current_epoch`, given its QA power.
    pub fn termination_fee(
        self,
        sector: &SectorOnChainInfo,
        qa_power: &StoragePower,
        current_epoch: ChainEpoch,
        reward_estimate: &FilterEstimate,
        power_estimate: &FilterEstimate,
    ) -> TokenAmount {
        let power_start = self.power_start(sector);
        let reward_based = || RewardBasedFee {
            day_reward: sector.expected_day_reward(),
            sector_age: current_epoch - power_start,
            storage_pledge: sector.expected_storage_pledge(),
            qa_power,
            reward_estimate,
            power_estimate,
            replaced_day_reward: sector.replaced_day_reward(),
            replaced_sector_age: match self {
                Self::V8 | Self::V9 | Self::V10 | Self::V11 => sector.replaced_sector_age(),
                _ => power_start - sector.activation,
            },
        };
        let pledge_based = || PledgeBasedFee {
            initial_pledge: &sector.initial_pledge,
            sector_age: current_epoch - sector.activation,
            qa_power,
            reward_estimate,
            power_estimate,
        };
        match self {
            Self::V8 => reward_based_fee!(
                v8,
                from_token_v3_to_v2,
                from_token_v2_to_v3,
                from_filter_estimate_v3_to_v2,
                reward_based()
            ),
            Self::V9 => reward_based_fee!(
                v9,
                from_token_v3_to_v2,
                from_token_v2_to_v3,
                from_filter_estimate_v3_to_v2,
                reward_based()
            ),
            Self::V10 => reward_based_fee!(
                v10,
                TokenAmount::clone,
                TokenAmount::clone,
                FilterEstimate::clone,
                reward_based()
            ),
            Self::V11 => reward_based_fee!(
                v11,
                TokenAmount::clone,
                TokenAmount::clone,
                FilterEstimate::clone,
                reward_based()
            ),
            Self::V12 => reward_based_fee!(
                v12,
                from_token_v3_to_v4,
                from_token_v4_to_v3,
                FilterEstimate::clone,
                reward_based()
            ),
            Self::V13 => reward_based_fee!(
                v13,
                from_token_v3_to_v4,
                from_token_v4_to_v3,
                FilterEstimate::clone,
                reward_based()
            ),
            Self::V14 => reward_based_fee!(
                v14,
                from_token_v3_to_v4,
                from_token_v4_to_v3,
                from_filter_estimate_v3_to_v14,
                reward_based()
            ),
            Self::V15 => reward_based_fee!(
                v15,
                from_token_v3_to_v4,
                from_token_v4_to_v3,
                from_filter_estimate_v3_to_v15,
                reward_based()
            ),
            Self::V16 => pledge_based_fee!(v16, from_filter_estimate_v3_to_v16, pledge_based()),
            Self::V17 => pledge_based_fee!(v17, from_filter_estimate_v3_to_v17, pledge_based()),
        }
    }
}
