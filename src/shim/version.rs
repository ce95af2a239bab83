// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Deserialize, Serialize};

use crate::lotus_json::lotus_json_with_self;

/// Network version, as reported by `Filecoin.StateNetworkVersion`.
#[derive(
    Debug,
    Eq,
    PartialEq,
    Clone,
    Copy,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Into,
    derive_more::Display,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct NetworkVersion(pub u32);

lotus_json_with_self!(NetworkVersion);

/// Built-in actors release.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Ord, PartialOrd, Hash, derive_more::Display)]
#[display("v{_0}")]
pub struct ActorVersion(pub u32);

impl NetworkVersion {
    /// The actors release that runs at this network version.
    ///
    /// Versions past the newest known upgrade map to the newest known release.
    pub fn actor_version(self) -> ActorVersion {
        ActorVersion(match self.0 {
            0..=3 => 0,
            4..=9 => 2,
            10 | 11 => 3,
            12 => 4,
            13 => 5,
            14 => 6,
            15 => 7,
            16 => 8,
            17 => 9,
            18 => 10,
            19 | 20 => 11,
            21 => 12,
            22 => 13,
            23 => 14,
            24 => 15,
            25 | 26 => 16,
            _ => 17,
        })
    }
}
