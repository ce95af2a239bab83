// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::Context as _;
use async_trait::async_trait;
use cid::Cid;
use fvm_ipld_blockstore::Blockstore;
use tracing::trace;

use super::MemoryDB;
use crate::rpc::{self, prelude::*};

/// Where blocks missing from the cache come from.
#[async_trait]
pub trait RemoteBlocks: Send + Sync {
    /// Fails if the block is unknown to the remote.
    async fn fetch(&self, cid: &Cid) -> anyhow::Result<Vec<u8>>;
}

#[async_trait]
impl RemoteBlocks for rpc::Client {
    async fn fetch(&self, cid: &Cid) -> anyhow::Result<Vec<u8>> {
        Ok(ChainReadObj::call(self, (*cid,)).await?)
    }
}

#[async_trait]
impl RemoteBlocks for MemoryDB {
    async fn fetch(&self, cid: &Cid) -> anyhow::Result<Vec<u8>> {
        self.get(cid)?
            .with_context(|| format!("can't find object with cid={cid}"))
    }
}

/// A read-through, write-never store: an in-memory cache in front of a remote.
pub struct TieredStore<R> {
    cache: MemoryDB,
    remote: R,
}

impl<R: RemoteBlocks> TieredStore<R> {
    pub fn new(remote: R) -> Self {
        Self {
            cache: MemoryDB::default(),
            remote,
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Number of blocks cached so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub async fn get(&self, cid: &Cid) -> anyhow::Result<Vec<u8>> {
        if let Some(bytes) = self.cache.get(cid)? {
            trace!(%cid, "cache hit");
            return Ok(bytes);
        }
        let bytes = self
            .remote
            .fetch(cid)
            .await
            .with_context(|| format!("couldn't fetch block {cid}"))?;
        self.cache.put_keyed(cid, &bytes)?;
        Ok(bytes)
    }
}
