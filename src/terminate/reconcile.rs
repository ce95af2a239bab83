// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use num_traits::{Signed as _, Zero as _};
use tracing::warn;

use crate::actors::miner::MinerState;
use crate::shim::{address::Address, econ::TokenAmount};

/// A miner's funds as they would be after terminating the sectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedFunds {
    pub initial_pledge: TokenAmount,
    pub pre_commit_deposits: TokenAmount,
    pub vesting_funds: TokenAmount,
    /// May be negative: a penalty larger than the vesting funds eats into the
    /// available balance.
    pub available_balance: TokenAmount,
}

/// Apply `penalty` and the release of `pledge_delta` to the funds of `miner`.
///
/// The penalty is paid from vesting funds first, the rest from the available balance.
pub fn reconcile(
    miner: &Address,
    state: &MinerState,
    balance: &TokenAmount,
    penalty: &TokenAmount,
    pledge_delta: &TokenAmount,
) -> ProjectedFunds {
    let available = state.available_balance(balance) + pledge_delta;

    let initial_pledge = &state.initial_pledge - pledge_delta;
    if initial_pledge.atto().is_negative() {
        warn!(
            %miner,
            %initial_pledge,
            "released pledge exceeds the pledge requirement"
        );
    }

    let (vesting_funds, available_balance) = if &state.locked_funds >= penalty {
        (&state.locked_funds - penalty, available)
    } else {
        (
            TokenAmount::zero(),
            available - (penalty - &state.locked_funds),
        )
    };

    ProjectedFunds {
        initial_pledge,
        pre_commit_deposits: state.pre_commit_deposits.clone(),
        vesting_funds,
        available_balance,
    }
}
