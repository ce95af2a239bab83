// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Types that are shared _between_ APIs.

use cid::Cid;
use num::BigInt;
use serde::{Deserialize, Serialize};

use crate::lotus_json::lotus_json_with_self;
use crate::shim::{
    clock::ChainEpoch,
    econ::TokenAmount,
    sector::{RegisteredSealProof, SectorNumber, SectorSize},
};

#[cfg(test)]
mod tests;

/// An actor's entry in the state tree.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct ActorState {
    /// Identifies the actor's code, and so its type and version.
    #[serde(with = "crate::lotus_json")]
    pub code: Cid,
    /// Root of the actor's CBOR state.
    #[serde(with = "crate::lotus_json")]
    pub head: Cid,
    pub nonce: u64,
    #[serde(with = "crate::lotus_json")]
    pub balance: TokenAmount,
}

lotus_json_with_self!(ActorState);

/// The parts of `Filecoin.StateMinerInfo` this crate reads.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct MinerInfo {
    /// Amount of space in each sector committed by this miner.
    #[serde(with = "crate::lotus_json")]
    pub sector_size: SectorSize,
}

lotus_json_with_self!(MinerInfo);

/// A committed sector, as `Filecoin.StateMinerSectors` reports it.
///
/// Fields that only exist in some actor versions are defaulted when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SectorOnChainInfo {
    pub sector_number: SectorNumber,

    /// The seal proof type implies the PoSt proofs
    #[serde(with = "crate::lotus_json")]
    pub seal_proof: RegisteredSealProof,

    /// Epoch during which the sector proof was accepted
    pub activation: ChainEpoch,

    /// Epoch during which the sector expires
    pub expiration: ChainEpoch,

    /// Integral of active deals over sector lifetime
    #[serde(with = "crate::lotus_json")]
    pub deal_weight: BigInt,

    /// Integral of active verified deals over sector lifetime
    #[serde(with = "crate::lotus_json")]
    pub verified_deal_weight: BigInt,

    /// Pledge collected to commit this sector
    #[serde(with = "crate::lotus_json")]
    pub initial_pledge: TokenAmount,

    /// Expected one day projection of reward for sector computed at activation
    /// time
    #[serde(with = "crate::lotus_json", default)]
    pub expected_day_reward: Option<TokenAmount>,

    /// Expected twenty day projection of reward for sector computed at
    /// activation time
    #[serde(with = "crate::lotus_json", default)]
    pub expected_storage_pledge: Option<TokenAmount>,

    /// Epoch at which the sector's power calculation is based, later than
    /// `activation` if the sector was extended or updated.
    #[serde(default)]
    pub power_base_epoch: Option<ChainEpoch>,

    /// Age of the sector this one replaced, if any
    #[serde(default)]
    pub replaced_sector_age: Option<ChainEpoch>,

    /// Day reward of the sector this one replaced, if any
    #[serde(with = "crate::lotus_json", default)]
    pub replaced_day_reward: Option<TokenAmount>,
}

lotus_json_with_self!(SectorOnChainInfo);

impl SectorOnChainInfo {
    pub fn power_base_epoch(&self) -> ChainEpoch {
        self.power_base_epoch.unwrap_or(self.activation)
    }

    pub fn expected_day_reward(&self) -> TokenAmount {
        self.expected_day_reward.clone().unwrap_or_default()
    }

    pub fn expected_storage_pledge(&self) -> TokenAmount {
        self.expected_storage_pledge.clone().unwrap_or_default()
    }

    pub fn replaced_day_reward(&self) -> TokenAmount {
        self.replaced_day_reward.clone().unwrap_or_default()
    }

    pub fn replaced_sector_age(&self) -> ChainEpoch {
        self.replaced_sector_age.unwrap_or_default()
    }
}

#[cfg(test)]
impl SectorOnChainInfo {
    /// A committed-capacity 32 GiB sector with no reward projections.
    pub fn committed_capacity(
        sector_number: SectorNumber,
        activation: ChainEpoch,
        expiration: ChainEpoch,
    ) -> Self {
        Self {
            sector_number,
            seal_proof: RegisteredSealProof::StackedDRG32GiBV1P1,
            activation,
            expiration,
            deal_weight: BigInt::default(),
            verified_deal_weight: BigInt::default(),
            initial_pledge: TokenAmount::default(),
            expected_day_reward: None,
            expected_storage_pledge: None,
            power_base_epoch: None,
            replaced_sector_age: None,
            replaced_day_reward: None,
        }
    }
}
