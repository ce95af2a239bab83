// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod common;

use std::collections::HashMap;
use std::io::Write as _;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use cid::Cid;
use fvm_ipld_bitfield::BitField;
use fvm_ipld_encoding::DAG_CBOR;
use fvm_shared3::{econ::TokenAmount, smooth::FilterEstimate};
use multihash_codetable::{Code, MultihashDigest as _};
use num::BigInt;
use predicates::prelude::*;
use serde_json::{Value, json};

use crate::common::{FakeNode, terminate_all};

const EPOCHS_IN_DAY: i64 = 2880;

fn put(blocks: &mut HashMap<String, String>, data: Vec<u8>) -> Cid {
    let cid = Cid::new_v1(DAG_CBOR, Code::Blake2b256.digest(&data));
    blocks.insert(cid.to_string(), STANDARD.encode(data));
    cid
}

fn fil(n: i64) -> TokenAmount {
    TokenAmount::from_whole(n)
}

fn sector(number: u64, day_reward: i64) -> Value {
    json!({
        "SectorNumber": number,
        "SealProof": 8,
        "SealedCID": {"/": "baeaaaaa"},
        "DealIDs": null,
        "Activation": 0,
        "Expiration": 540 * EPOCHS_IN_DAY,
        "DealWeight": "0",
        "VerifiedDealWeight": "0",
        "InitialPledge": fil(day_reward * 30).atto().to_string(),
        "ExpectedDayReward": fil(day_reward).atto().to_string(),
        "ExpectedStoragePledge": fil(day_reward * 20).atto().to_string(),
        "ReplacedSectorAge": 0,
        "ReplacedDayReward": "0",
        "SectorKeyCID": null,
        "SimpleQAPower": false
    })
}

/// A node at day 300 on actors v11 with one miner, `f01000`, holding sectors
/// 1 and 2.
fn node(network_name: &'static str) -> FakeNode {
    let zero = TokenAmount::default();
    let mut blocks = HashMap::new();
    let reward = put(
        &mut blocks,
        fvm_ipld_encoding::to_vec(&(
            &zero,
            &zero,
            0_i64,
            &zero,
            &zero,
            FilterEstimate::new(BigInt::from(0), BigInt::from(0)),
            &zero,
            300 * EPOCHS_IN_DAY,
            &zero,
            &zero,
            &zero,
        ))
        .unwrap(),
    );
    let power = put(
        &mut blocks,
        fvm_ipld_encoding::to_vec(&(
            &zero,
            &zero,
            &zero,
            &zero,
            &zero,
            &zero,
            &zero,
            &zero,
            FilterEstimate::new(BigInt::from(1) << 60, BigInt::from(0)),
            1_i64,
            1_i64,
            Cid::default(),
            0_i64,
            Cid::default(),
            None::<Cid>,
        ))
        .unwrap(),
    );
    let miner = put(
        &mut blocks,
        fvm_ipld_encoding::to_vec(&(
            Cid::default(),
            fil(50),
            fil(30),
            Cid::default(),
            fil(0),
            fil(1000),
            Cid::default(),
            Cid::default(),
            Cid::default(),
            Cid::default(),
            0_i64,
            0_u64,
            Cid::default(),
            BitField::new(),
            false,
        ))
        .unwrap(),
    );
    let prefix = if network_name == "mainnet" { 'f' } else { 't' };

    FakeNode::start(move |method, params| match method {
        "Filecoin.StateNetworkName" => Ok(json!(network_name)),
        "Filecoin.ChainHead" => Ok(json!({
            "Cids": [{"/": "baeaaaaa"}],
            "Blocks": [],
            "Height": 300 * EPOCHS_IN_DAY
        })),
        "Filecoin.StateNetworkVersion" => Ok(json!(20)),
        "Filecoin.StateGetActor" => {
            let (head, balance) = match params[0].as_str() {
                Some("f02" | "t02") => (reward, fil(0)),
                Some("f04" | "t04") => (power, fil(0)),
                Some("f01000" | "t01000") => (miner, fil(1100)),
                _ => return Ok(Value::Null),
            };
            Ok(json!({
                "Code": {"/": "baeaaaaa"},
                "Head": {"/": head.to_string()},
                "Nonce": 0,
                "Balance": balance.atto().to_string()
            }))
        }
        "Filecoin.StateMinerInfo" => Ok(json!({
            "Owner": format!("{prefix}01001"),
            "Worker": format!("{prefix}01002"),
            "SectorSize": 34359738368_u64
        })),
        "Filecoin.StateMinerActiveSectors" => match params[0].as_str() {
            Some("f01000" | "t01000") => Ok(json!([sector(1, 1), sector(2, 2)])),
            _ => Ok(json!([])),
        },
        // the filter is run-length encoded, only ever ask for sector 2
        "Filecoin.StateMinerSectors" => Ok(json!([sector(2, 2)])),
        "Filecoin.ChainReadObj" => params[0]["/"]
            .as_str()
            .and_then(|cid| blocks.get(cid))
            .map(|it| json!(it))
            .ok_or_else(|| "block not found".to_string()),
        other => Err(format!("method {other} not found")),
    })
}

fn row_words(stdout: &[u8]) -> Vec<Vec<String>> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| line.split_whitespace().map(String::from).collect())
        .collect()
}

#[test]
fn requires_a_miner() {
    terminate_all()
        .arg("balance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("one of --actor or --miners-path is required"));
}

#[test]
fn actor_and_miners_path_conflict() {
    let miners = tempfile::NamedTempFile::new().unwrap();
    terminate_all()
        .args(["balance", "--actor", "f01000", "--miners-path"])
        .arg(miners.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn bad_address() {
    terminate_all()
        .args(["balance", "--actor", "x01000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't parse miner address `x01000`"));
}

#[test]
fn bad_sector_list() {
    terminate_all()
        .args(["balance", "--actor", "f01000", "--sectors", "1,,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't parse sector number"));
}

#[test]
fn unreachable_node() {
    terminate_all()
        .args(["--timeout", "5", "balance", "--actor", "f01000"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn all_active_sectors() {
    let node = node("mainnet");
    let output = terminate_all()
        .env("FULLNODE_API_INFO", node.api_info())
        .args(["balance", "--actor", "f01000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("sector: 1 ExpDayReward: 1 FIL"))
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        row_words(&output),
        [
            vec![
                "epoch", "miner", "sector-size", "sector-count", "pledge", "deposit", "vesting",
                "available", "penalty", "pledge-delta",
            ],
            vec![
                "864000", "f01000", "32", "GiB", "2", "910", "FIL", "50", "FIL", "0", "-130",
                "FIL", "270", "FIL", "90", "FIL",
            ],
        ]
    );
}

#[test]
fn restricted_sectors_on_testnet() {
    let node = node("calibrationnet");
    let mut sectors = tempfile::NamedTempFile::new().unwrap();
    writeln!(sectors, "2").unwrap();
    let output = terminate_all()
        .env("FULLNODE_API_INFO", node.api_info())
        .args(["balance", "--actor", "f01000", "--sectors-path"])
        .arg(sectors.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows = row_words(&output);
    assert_eq!(rows.len(), 2);
    // penalty of 20 + 140 / 2 days at 2 FIL, 30 of it from vesting
    assert_eq!(
        rows[1],
        [
            "864000", "t01000", "32", "GiB", "1", "940", "FIL", "50", "FIL", "0", "-70", "FIL",
            "180", "FIL", "60", "FIL",
        ]
    );
}

#[test]
fn failure_keeps_earlier_rows() {
    let node = node("mainnet");
    let mut miners = tempfile::NamedTempFile::new().unwrap();
    writeln!(miners, "f01000\n\nf01234").unwrap();
    let output = terminate_all()
        .env("FULLNODE_API_INFO", node.api_info())
        .arg("balance")
        .arg("--miners-path")
        .arg(miners.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("miner f01234 has no matching sectors"))
        .get_output()
        .stdout
        .clone();
    let rows = row_words(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], "f01000");
}
