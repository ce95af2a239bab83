// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Content-addressed block storage.
//!
//! State is never written back to the node: [`TieredStore`] reads through an
//! in-process [`MemoryDB`] to a [`RemoteBlocks`](tiered::RemoteBlocks) source
//! and only ever fills the cache.

mod memory;
mod tiered;

use memory::MemoryDB;
pub use tiered::TieredStore;
