// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! A typed JSON-RPC client for the subset of the Filecoin full-node API this
//! crate reads.
//!
//! Usage guide:
//! ```ignore
//! use crate::rpc::{self, prelude::*};
//!
//! let client = rpc::Client::connect(&api_info, timeout).await?;
//! let head = ChainHead::call(&client, ()).await?;
//! ```

mod client;
mod reflect;
pub mod types;

pub use client::{ApiInfo, Client, DEFAULT_TIMEOUT};
pub use reflect::RpcMethod;
use reflect::Request;

/// Protocol, transport or remote error
pub use jsonrpsee::core::ClientError;

/// All method definitions.
pub mod prelude {
    pub use super::reflect::RpcMethodExt as _;

    pub use super::methods::chain::*;
    pub use super::methods::state::*;
}

/// Methods are grouped by API vertical, as the node groups them.
///
/// Types used by a single vertical live next to its methods, types shared
/// across verticals live in [`types`].
mod methods {
    pub mod chain;
    pub mod state;
}
