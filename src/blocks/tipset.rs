// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use itertools::Itertools as _;

use crate::shim::clock::ChainEpoch;

/// The CIDs of the blocks in a tipset, in canonical order.
///
/// Every state query is pinned to one of these so that all reads for a miner
/// see the same chain state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TipsetKey(Vec<Cid>);

impl TipsetKey {
    pub fn cids(&self) -> &[Cid] {
        &self.0
    }

    pub fn into_cids(self) -> Vec<Cid> {
        self.0
    }
}

impl From<Vec<Cid>> for TipsetKey {
    fn from(value: Vec<Cid>) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TipsetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// The parts of a chain head this crate needs: where it is, and how to name it.
///
/// Block headers are not retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tipset {
    key: TipsetKey,
    epoch: ChainEpoch,
}

impl Tipset {
    pub fn new(key: TipsetKey, epoch: ChainEpoch) -> Self {
        Self { key, epoch }
    }

    pub fn key(&self) -> &TipsetKey {
        &self.key
    }

    pub fn epoch(&self) -> ChainEpoch {
        self.epoch
    }
}

mod lotus_json {
    use super::*;
    use crate::lotus_json::*;
    use serde::{Deserialize, Serialize};
    #[cfg(test)]
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct TipsetLotusJson {
        cids: LotusJson<TipsetKey>,
        height: LotusJson<ChainEpoch>,
    }

    impl HasLotusJson for Tipset {
        type LotusJson = TipsetLotusJson;

        #[cfg(test)]
        fn snapshots() -> Vec<(serde_json::Value, Self)> {
            vec![(
                json!({
                    "Cids": [{"/": "baeaaaaa"}],
                    "Height": 2_000_000
                }),
                Tipset::new(vec![Cid::default()].into(), 2_000_000),
            )]
        }

        fn into_lotus_json(self) -> Self::LotusJson {
            let Tipset { key, epoch } = self;
            TipsetLotusJson {
                cids: key.into(),
                height: epoch.into(),
            }
        }

        fn from_lotus_json(TipsetLotusJson { cids, height }: Self::LotusJson) -> Self {
            Tipset {
                key: cids.into_inner(),
                epoch: height.into_inner(),
            }
        }
    }

    #[test]
    fn snapshots() {
        assert_all_snapshots::<Tipset>();
    }

    #[test]
    fn ignores_block_headers() {
        let head = serde_json::from_value::<LotusJson<Tipset>>(json!({
            "Cids": [{"/": "baeaaaaa"}],
            "Blocks": [{"Miner": "f01000"}],
            "Height": 42
        }))
        .unwrap()
        .into_inner();
        assert_eq!(head.epoch(), 42);
        assert_eq!(head.key().cids(), &[Cid::default()]);
    }
}
