// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::lotus_json::LotusJson;
use pretty_assertions::assert_eq;
use serde_json::json;

fn from_json<T>(value: serde_json::Value) -> T
where
    T: crate::lotus_json::HasLotusJson + Clone,
{
    serde_json::from_value::<LotusJson<T>>(value)
        .unwrap()
        .into_inner()
}

#[test]
fn actor_state() {
    let actor: ActorState = from_json(json!({
        "Code": {"/": "baeaaaaa"},
        "Head": {"/": "baeaaaaa"},
        "Nonce": 3,
        "Balance": "1000000000000000000",
        "DelegatedAddress": null
    }));
    assert_eq!(actor.nonce, 3);
    assert_eq!(actor.balance, TokenAmount::from_whole(1));
}

#[test]
fn miner_info_ignores_unread_fields() {
    let info: MinerInfo = from_json(json!({
        "Owner": "f01001",
        "Worker": "f01002",
        "NewWorker": "<empty>",
        "ControlAddresses": null,
        "PeerId": null,
        "Multiaddrs": null,
        "WindowPoStProofType": 8,
        "SectorSize": 34359738368_u64,
        "WindowPoStPartitionSectors": 2349,
        "ConsensusFaultElapsed": -1
    }));
    assert_eq!(info.sector_size, SectorSize::_32GiB);
}

#[test]
fn miner_info_on_a_testnet() {
    // owner and worker are skipped, whatever their network prefix
    let info: MinerInfo = from_json(json!({
        "Owner": "t01001",
        "Worker": "t3vvmn62lofvhjd2ugzca6sof2j2ubwok6cj4xxbfzz4yuxfkgobpihhd2thlanmsh3w2ptld2gqkn2jvlss4a",
        "SectorSize": 68719476736_u64
    }));
    assert_eq!(info.sector_size, SectorSize::_64GiB);
}

#[test]
fn legacy_sector() {
    let sector: SectorOnChainInfo = from_json(json!({
        "SectorNumber": 7,
        "SealProof": 8,
        "SealedCID": {"/": "baeaaaaa"},
        "DealIDs": null,
        "Activation": 100,
        "Expiration": 1_555_300,
        "DealWeight": "0",
        "VerifiedDealWeight": "0",
        "InitialPledge": "200",
        "ExpectedDayReward": "10",
        "ExpectedStoragePledge": "20",
        "ReplacedSectorAge": 0,
        "ReplacedDayReward": "0",
        "SectorKeyCID": null,
        "SimpleQAPower": false
    }));
    assert_eq!(sector.sector_number, 7);
    assert_eq!(
        sector.seal_proof,
        RegisteredSealProof::StackedDRG32GiBV1P1
    );
    assert_eq!(sector.power_base_epoch(), 100);
    assert_eq!(sector.expected_day_reward(), TokenAmount::from_atto(10));
    assert_eq!(sector.replaced_sector_age(), 0);
}

#[test]
fn sector_with_power_base_epoch() {
    let sector: SectorOnChainInfo = from_json(json!({
        "SectorNumber": 8,
        "SealProof": 8,
        "Activation": 100,
        "Expiration": 2_000_000,
        "DealWeight": "0",
        "VerifiedDealWeight": "42",
        "InitialPledge": "200",
        "ExpectedDayReward": null,
        "ExpectedStoragePledge": null,
        "PowerBaseEpoch": 5_000,
        "ReplacedDayReward": null,
        "Flags": 1
    }));
    assert_eq!(sector.power_base_epoch(), 5_000);
    assert_eq!(sector.verified_deal_weight, BigInt::from(42));
    assert_eq!(sector.expected_day_reward(), TokenAmount::default());
    assert_eq!(sector.replaced_day_reward(), TokenAmount::default());
}

#[test]
fn malformed_token_amount_is_an_error() {
    let result = serde_json::from_value::<LotusJson<ActorState>>(json!({
        "Code": {"/": "baeaaaaa"},
        "Head": {"/": "baeaaaaa"},
        "Nonce": 0,
        "Balance": "lots"
    }));
    assert!(result.is_err());
}
