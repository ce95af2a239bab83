// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fvm_ipld_bitfield::BitField;

use crate::blocks::TipsetKey;
use crate::rpc::RpcMethod;
use crate::rpc::types::{ActorState, MinerInfo, SectorOnChainInfo};
use crate::shim::{address::Address, version::NetworkVersion};

pub enum StateNetworkName {}
impl RpcMethod<0> for StateNetworkName {
    const NAME: &'static str = "Filecoin.StateNetworkName";
    const PARAM_NAMES: [&'static str; 0] = [];
    type Params = ();
    type Ok = String;
}

pub enum StateNetworkVersion {}
impl RpcMethod<1> for StateNetworkVersion {
    const NAME: &'static str = "Filecoin.StateNetworkVersion";
    const PARAM_NAMES: [&'static str; 1] = ["tipset_key"];
    type Params = (TipsetKey,);
    type Ok = NetworkVersion;
}

/// Returns `null` for an address with no actor.
pub enum StateGetActor {}
impl RpcMethod<2> for StateGetActor {
    const NAME: &'static str = "Filecoin.StateGetActor";
    const PARAM_NAMES: [&'static str; 2] = ["address", "tipset_key"];
    type Params = (Address, TipsetKey);
    type Ok = Option<ActorState>;
}

pub enum StateMinerInfo {}
impl RpcMethod<2> for StateMinerInfo {
    const NAME: &'static str = "Filecoin.StateMinerInfo";
    const PARAM_NAMES: [&'static str; 2] = ["address", "tipset_key"];
    type Params = (Address, TipsetKey);
    type Ok = MinerInfo;
}

/// Sectors currently proving, i.e. active and not faulty or terminated.
pub enum StateMinerActiveSectors {}
impl RpcMethod<2> for StateMinerActiveSectors {
    const NAME: &'static str = "Filecoin.StateMinerActiveSectors";
    const PARAM_NAMES: [&'static str; 2] = ["address", "tipset_key"];
    type Params = (Address, TipsetKey);
    type Ok = Vec<SectorOnChainInfo>;
}

/// All sectors in the miner's sector set, optionally restricted to `sectors`.
pub enum StateMinerSectors {}
impl RpcMethod<3> for StateMinerSectors {
    const NAME: &'static str = "Filecoin.StateMinerSectors";
    const PARAM_NAMES: [&'static str; 3] = ["address", "sectors", "tipset_key"];
    type Params = (Address, Option<BitField>, TipsetKey);
    type Ok = Vec<SectorOnChainInfo>;
}
