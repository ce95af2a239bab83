// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Alpha-beta filter estimates published by the reward and power actors.

pub use fvm_shared3::smooth::FilterEstimate;
