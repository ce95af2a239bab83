// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;

use crate::blocks::Tipset;
use crate::rpc::RpcMethod;

pub enum ChainHead {}
impl RpcMethod<0> for ChainHead {
    const NAME: &'static str = "Filecoin.ChainHead";
    const PARAM_NAMES: [&'static str; 0] = [];
    type Params = ();
    type Ok = Tipset;
}

/// Reads the IPLD node with the given CID from the node's blockstore, as raw bytes.
pub enum ChainReadObj {}
impl RpcMethod<1> for ChainReadObj {
    const NAME: &'static str = "Filecoin.ChainReadObj";
    const PARAM_NAMES: [&'static str; 1] = ["cid"];
    type Params = (Cid,);
    type Ok = Vec<u8>;
}
