// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;

use fvm_ipld_bitfield::{BitField, json::BitFieldJson};
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Run-length encoded, starting with a run of zeros, e.g. `{1}` is `[1, 1]`.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitFieldLotusJson(BitFieldJson);

impl HasLotusJson for BitField {
    type LotusJson = BitFieldLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!([0]), Self::new()),
            (json!([1, 1]), {
                let mut it = Self::new();
                it.set(1);
                it
            }),
            (json!([1, 2, 2, 1]), {
                let mut it = Self::new();
                for i in [1, 2, 5] {
                    it.set(i);
                }
                it
            }),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        BitFieldLotusJson(BitFieldJson(self))
    }

    fn from_lotus_json(BitFieldLotusJson(BitFieldJson(it)): Self::LotusJson) -> Self {
        it
    }
}

#[test]
fn snapshots() {
    for (lotus_json, val) in BitField::snapshots() {
        let serialized = val.clone().into_lotus_json_value().unwrap();
        assert_eq!(serialized, lotus_json);
        let deserialized =
            BitField::from_lotus_json(serde_json::from_value(lotus_json).unwrap());
        assert_eq!(
            deserialized.iter().collect::<Vec<_>>(),
            val.iter().collect::<Vec<_>>()
        );
    }
}
