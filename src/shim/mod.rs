// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Re-exports of the `fvm_shared` types this crate speaks in, plus the few
//! helpers the built-in types lack.

pub mod actors;
pub mod address;
pub mod clock;
pub mod econ;
pub mod sector;
pub mod smooth;
pub mod version;
