// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt::Display;

use crate::rpc::ClientError;
use crate::shim::{
    address::Address,
    version::{ActorVersion, NetworkVersion},
};

/// Everything that can stop a balance projection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or contradictory inputs.
    #[error("{0}")]
    Config(String),
    #[error("couldn't parse {kind} `{input}`: {reason}")]
    Parse {
        kind: &'static str,
        input: String,
        reason: String,
    },
    #[error("miner {0} has no matching sectors")]
    NoSectors(Address),
    /// Actor state is missing, or doesn't have the shape its version implies.
    #[error("unexpected {actor} state: {reason}")]
    StateShape { actor: String, reason: String },
    #[error(
        "no termination fee rule for network version {network_version} (actors {actor_version})"
    )]
    UnsupportedNetworkVersion {
        network_version: NetworkVersion,
        actor_version: ActorVersion,
    },
    /// The node refused the request, or couldn't be reached.
    #[error(transparent)]
    Api(#[from] ClientError),
    #[error("couldn't read state: {0:#}")]
    Store(anyhow::Error),
}

impl Error {
    pub fn config(reason: impl Display) -> Self {
        Self::Config(reason.to_string())
    }

    pub fn parse(kind: &'static str, input: impl Into<String>, reason: impl Display) -> Self {
        Self::Parse {
            kind,
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn state_shape(actor: impl Display, reason: impl Display) -> Self {
        Self::StateShape {
            actor: actor.to_string(),
            reason: reason.to_string(),
        }
    }
}
