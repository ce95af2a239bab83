// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::blocks::TipsetKey;
use ::cid::Cid;

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipsetKeyLotusJson(LotusJson<Vec<Cid>>);

impl HasLotusJson for TipsetKey {
    type LotusJson = TipsetKeyLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(json!([{"/": "baeaaaaa"}]), vec![Cid::default()].into())]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        TipsetKeyLotusJson(self.into_cids().into())
    }

    fn from_lotus_json(TipsetKeyLotusJson(cids): Self::LotusJson) -> Self {
        cids.into_inner().into()
    }
}
