// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Project a miner's funds as if all (or some) of its sectors were terminated
//! at the current chain head.
//!
//! [`InputSpec`] resolves the miners and sectors, [`NodeQuery`] reads the
//! chain, and [`write_report`] prints one row per miner.

mod accumulator;
mod balance;
mod input;
mod query;
mod reconcile;
mod report;

use balance::BalanceProjection;
pub use balance::write_report;
pub use input::InputSpec;
pub use query::NodeQuery;
pub use report::ReportWriter;
