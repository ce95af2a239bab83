// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use fvm_shared3::clock::{ChainEpoch, EPOCH_DURATION_SECONDS};

pub const SECONDS_IN_DAY: i64 = 86400;
pub const EPOCHS_IN_DAY: ChainEpoch = SECONDS_IN_DAY / EPOCH_DURATION_SECONDS;

#[test]
fn thirty_second_epochs() {
    assert_eq!(EPOCHS_IN_DAY, 2880);
}
