// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Built-in actor state, decoded with the `fil_actor_*_state` crates.
//!
//! Each actors release has its own state layout. [`with_state`] decodes a
//! state head as the `vN::State` of the release in force and hands it to a
//! closure-like body, which reads the fields this crate needs.

pub mod miner;
pub mod power;
pub mod reward;

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::shim::{address::Address, version::ActorVersion};

/// The reward actor, `f02`.
pub const REWARD_ACTOR_ADDR: Address = Address::new_id(2);
/// The storage power actor, `f04`.
pub const STORAGE_POWER_ACTOR_ADDR: Address = Address::new_id(4);

/// Oldest actors release whose state this crate reads.
pub const MIN_ACTOR_VERSION: ActorVersion = ActorVersion(8);
/// Newest actors release whose state this crate reads.
pub const MAX_ACTOR_VERSION: ActorVersion = ActorVersion(17);

pub(crate) fn decode_state<T: DeserializeOwned>(actor: &str, bytes: &[u8]) -> Result<T, Error> {
    fvm_ipld_encoding::from_slice(bytes).map_err(|e| Error::state_shape(actor, e))
}

pub(crate) fn unsupported_layout(actor: &str, version: impl Display) -> Error {
    Error::state_shape(
        actor,
        format_args!("actors {version} state layout is not supported"),
    )
}

/// Decode `$bytes` as `$krate::vN::State` for actors `$version`, then evaluate
/// `$body` with the state bound to `$state`.
macro_rules! with_state {
    ($krate:ident, $actor:expr, $version:expr, $bytes:expr, |$state:ident| $body:expr) => {{
        let (actor, version, bytes): (&str, $crate::shim::version::ActorVersion, &[u8]) =
            ($actor, $version, $bytes);
        match version.0 {
            8 => $crate::actors::decode_state::<$krate::v8::State>(actor, bytes).map(|$state| $body),
            9 => $crate::actors::decode_state::<$krate::v9::State>(actor, bytes).map(|$state| $body),
            10 => $crate::actors::decode_state::<$krate::v10::State>(actor, bytes).map(|$state| $body),
            11 => $crate::actors::decode_state::<$krate::v11::State>(actor, bytes).map(|$state| $body),
            12 => $crate::actors::decode_state::<$krate::v12::State>(actor, bytes).map(|$state| $body),
            13 => $crate::actors::decode_state::<$krate::v13::State>(actor, bytes).map(|$state| $body),
            14 => $crate::actors::decode_state::<$krate::v14::State>(actor, bytes).map(|$state| $body),
            15 => $crate::actors::decode_state::<$krate::v15::State>(actor, bytes).map(|$state| $body),
            16 => $crate::actors::decode_state::<$krate::v16::State>(actor, bytes).map(|$state| $body),
            17 => $crate::actors::decode_state::<$krate::v17::State>(actor, bytes).map(|$state| $body),
            _ => Err($crate::actors::unsupported_layout(actor, version)),
        }
    }};
}
pub(crate) use with_state;

/// Copy a filter estimate out of whichever `FilterEstimate` a release uses.
macro_rules! filter_estimate {
    ($estimate:expr) => {{
        let estimate = &$estimate;
        $crate::shim::smooth::FilterEstimate {
            position: estimate.position.clone(),
            velocity: estimate.velocity.clone(),
        }
    }};
}
pub(crate) use filter_estimate;

/// Copy a token amount out of whichever `TokenAmount` a release uses.
macro_rules! token_amount {
    ($amount:expr) => {
        $crate::shim::econ::TokenAmount::from_atto($amount.atto().clone())
    };
}
pub(crate) use token_amount;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_a_shape_error() {
        let bytes = fvm_ipld_encoding::to_vec(&(1_u64, "x")).unwrap();
        let err = with_state!(
            fil_actor_reward_state,
            "reward actor",
            ActorVersion(11),
            &bytes,
            |state| state.epoch
        )
        .unwrap_err();
        assert!(matches!(err, Error::StateShape { .. }), "{err}");
    }

    #[test]
    fn releases_outside_the_supported_range_are_rejected() {
        for version in [ActorVersion(0), ActorVersion(7), ActorVersion(18)] {
            let err = with_state!(
                fil_actor_reward_state,
                "reward actor",
                version,
                &[],
                |state| state.epoch
            )
            .unwrap_err();
            assert!(
                err.to_string()
                    .contains(&format!("actors {version} state layout is not supported")),
                "{err}"
            );
        }
    }
}
