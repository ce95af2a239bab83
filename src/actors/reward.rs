// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{filter_estimate, with_state};
use crate::error::Error;
use crate::shim::{smooth::FilterEstimate, version::ActorVersion};

/// Smoothed block reward per epoch, from a reward actor state head.
pub fn this_epoch_reward_smoothed(
    version: ActorVersion,
    bytes: &[u8],
) -> Result<FilterEstimate, Error> {
    with_state!(fil_actor_reward_state, "reward actor", version, bytes, |state| {
        filter_estimate!(state.this_epoch_reward_smoothed)
    })
}
