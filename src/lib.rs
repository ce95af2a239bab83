// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod actors;
mod blocks;
mod cli;
mod cli_shared;
mod db;
mod error;
mod lotus_json;
mod rpc;
mod shim;
mod terminate;

pub use cli::main::main as terminate_main;
