// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeSet;

use async_trait::async_trait;
use fvm_ipld_bitfield::BitField;
use itertools::Itertools as _;
use tracing::debug;

use crate::actors::{REWARD_ACTOR_ADDR, STORAGE_POWER_ACTOR_ADDR, miner::MinerState, power, reward};
use crate::blocks::{Tipset, TipsetKey};
use crate::db::TieredStore;
use crate::error::Error;
use crate::rpc::{
    self,
    prelude::*,
    types::{ActorState, MinerInfo, SectorOnChainInfo},
};
use crate::shim::{
    address::Address,
    clock::ChainEpoch,
    sector::SectorNumber,
    smooth::FilterEstimate,
    version::{ActorVersion, NetworkVersion},
};

/// The chain state every query for one miner is pinned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSnapshot {
    pub tipset: Tipset,
    pub network_version: NetworkVersion,
}

impl ChainSnapshot {
    pub fn epoch(&self) -> ChainEpoch {
        self.tipset.epoch()
    }

    pub fn key(&self) -> &TipsetKey {
        self.tipset.key()
    }

    pub fn actor_version(&self) -> ActorVersion {
        self.network_version.actor_version()
    }
}

/// The chain reads a balance projection needs.
#[async_trait]
pub trait ChainQuery: Send + Sync {
    async fn chain_head(&self) -> Result<ChainSnapshot, Error>;

    /// The reward actor's smoothed per-epoch reward.
    async fn reward_estimate(&self, snapshot: &ChainSnapshot) -> Result<FilterEstimate, Error>;

    /// The power actor's smoothed network QA power.
    async fn power_estimate(&self, snapshot: &ChainSnapshot) -> Result<FilterEstimate, Error>;

    async fn miner_info(
        &self,
        miner: &Address,
        snapshot: &ChainSnapshot,
    ) -> Result<MinerInfo, Error>;

    /// `sectors` of `miner`, or all of its active sectors if `sectors` is empty.
    async fn sectors(
        &self,
        miner: &Address,
        sectors: &BTreeSet<SectorNumber>,
        snapshot: &ChainSnapshot,
    ) -> Result<Vec<SectorOnChainInfo>, Error>;

    /// Fails with [`Error::StateShape`] if there is no such actor.
    async fn actor_record(
        &self,
        address: &Address,
        snapshot: &ChainSnapshot,
    ) -> Result<ActorState, Error>;

    async fn miner_state(
        &self,
        record: &ActorState,
        snapshot: &ChainSnapshot,
    ) -> Result<MinerState, Error>;

    /// Like [`ChainQuery::sectors`], but finding none is an error.
    async fn sector_infos(
        &self,
        miner: &Address,
        sectors: &BTreeSet<SectorNumber>,
        snapshot: &ChainSnapshot,
    ) -> Result<Vec<SectorOnChainInfo>, Error> {
        let infos = self.sectors(miner, sectors, snapshot).await?;
        if infos.is_empty() {
            Err(Error::NoSectors(*miner))
        } else {
            Ok(infos)
        }
    }
}

/// [`ChainQuery`] over a node's JSON-RPC API.
///
/// State blocks are cached for the lifetime of the value, so miners sharing
/// state roots only fetch them once.
pub struct NodeQuery {
    store: TieredStore<rpc::Client>,
}

impl NodeQuery {
    pub fn new(client: rpc::Client) -> Self {
        Self {
            store: TieredStore::new(client),
        }
    }

    fn client(&self) -> &rpc::Client {
        self.store.remote()
    }

    async fn state_head(&self, record: &ActorState) -> Result<Vec<u8>, Error> {
        self.store.get(&record.head).await.map_err(Error::Store)
    }
}

#[async_trait]
impl ChainQuery for NodeQuery {
    async fn chain_head(&self) -> Result<ChainSnapshot, Error> {
        let tipset = ChainHead::call(self.client(), ()).await?;
        let network_version =
            StateNetworkVersion::call(self.client(), (tipset.key().clone(),)).await?;
        debug!(epoch = tipset.epoch(), %network_version, "chain head");
        Ok(ChainSnapshot {
            tipset,
            network_version,
        })
    }

    async fn reward_estimate(&self, snapshot: &ChainSnapshot) -> Result<FilterEstimate, Error> {
        let record = self.actor_record(&REWARD_ACTOR_ADDR, snapshot).await?;
        let head = self.state_head(&record).await?;
        reward::this_epoch_reward_smoothed(snapshot.actor_version(), &head)
    }

    async fn power_estimate(&self, snapshot: &ChainSnapshot) -> Result<FilterEstimate, Error> {
        let record = self.actor_record(&STORAGE_POWER_ACTOR_ADDR, snapshot).await?;
        let head = self.state_head(&record).await?;
        power::this_epoch_qa_power_smoothed(snapshot.actor_version(), &head)
    }

    async fn miner_info(
        &self,
        miner: &Address,
        snapshot: &ChainSnapshot,
    ) -> Result<MinerInfo, Error> {
        Ok(StateMinerInfo::call(self.client(), (*miner, snapshot.key().clone())).await?)
    }

    async fn sectors(
        &self,
        miner: &Address,
        sectors: &BTreeSet<SectorNumber>,
        snapshot: &ChainSnapshot,
    ) -> Result<Vec<SectorOnChainInfo>, Error> {
        if sectors.is_empty() {
            return Ok(
                StateMinerActiveSectors::call(self.client(), (*miner, snapshot.key().clone()))
                    .await?,
            );
        }
        let filter = sector_filter(sectors)?;
        Ok(StateMinerSectors::call(
            self.client(),
            (*miner, Some(filter), snapshot.key().clone()),
        )
        .await?)
    }

    async fn actor_record(
        &self,
        address: &Address,
        snapshot: &ChainSnapshot,
    ) -> Result<ActorState, Error> {
        StateGetActor::call(self.client(), (*address, snapshot.key().clone()))
            .await?
            .ok_or_else(|| Error::state_shape(address, "no such actor"))
    }

    async fn miner_state(
        &self,
        record: &ActorState,
        snapshot: &ChainSnapshot,
    ) -> Result<MinerState, Error> {
        MinerState::decode(snapshot.actor_version(), &self.state_head(record).await?)
    }
}

fn sector_filter(sectors: &BTreeSet<SectorNumber>) -> Result<BitField, Error> {
    BitField::try_from_bits(sectors.iter().copied()).map_err(|e| {
        Error::parse(
            "sector set",
            sectors.iter().join(","),
            e,
        )
    })
}
