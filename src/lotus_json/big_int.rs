// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;

use num::BigInt;

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct BigIntLotusJson(#[serde(with = "stringify")] BigInt);

impl HasLotusJson for BigInt {
    type LotusJson = BigIntLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!("1"), BigInt::from(1)),
            (json!("-42"), BigInt::from(-42)),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        BigIntLotusJson(self)
    }

    fn from_lotus_json(BigIntLotusJson(it): Self::LotusJson) -> Self {
        it
    }
}

#[cfg(test)]
quickcheck! {
    fn quickcheck(val: BigInt) -> () {
        assert_unchanged_via_json(val)
    }
}
