// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod fee;
mod state;

pub use fee::{TerminationFeeRule, termination_fee_rule};
pub use state::MinerState;
