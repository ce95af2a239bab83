// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use jsonrpsee::server::{RpcModule, Server, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::Value;
use tokio::runtime::Runtime;

pub fn terminate_all() -> Command {
    let mut cmd = cargo_bin_cmd!("terminate-all");
    // never talk to a node the tests didn't start
    cmd.env("FULLNODE_API_INFO", "/ip4/127.0.0.1/tcp/9/http")
        .env("RUST_LOG", "info");
    cmd
}

/// Every method the `balance` subcommand calls.
const METHODS: &[&str] = &[
    "Filecoin.StateNetworkName",
    "Filecoin.ChainHead",
    "Filecoin.StateNetworkVersion",
    "Filecoin.StateGetActor",
    "Filecoin.StateMinerInfo",
    "Filecoin.StateMinerActiveSectors",
    "Filecoin.StateMinerSectors",
    "Filecoin.ChainReadObj",
];

/// A JSON-RPC node answering [`METHODS`] from a single handler.
///
/// Stops when dropped.
pub struct FakeNode {
    port: u16,
    handle: ServerHandle,
    // keeps the server tasks running
    _runtime: Runtime,
}

impl FakeNode {
    pub fn start(
        handler: impl Fn(&str, &Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        let runtime = Runtime::new().unwrap();
        let handler = Arc::new(handler);
        let mut module = RpcModule::new(());
        for &method in METHODS {
            let handler = handler.clone();
            module
                .register_method(method, move |params, _, _| {
                    let params: Value = params.parse()?;
                    handler(method, &params)
                        .map_err(|message| ErrorObjectOwned::owned(1, message, None::<()>))
                })
                .unwrap();
        }
        let (port, handle) = runtime.block_on(async {
            let server = Server::builder().build("127.0.0.1:0").await.unwrap();
            let port = server.local_addr().unwrap().port();
            (port, server.start(module))
        });
        Self {
            port,
            handle,
            _runtime: runtime,
        }
    }

    /// Value for `FULLNODE_API_INFO`.
    pub fn api_info(&self) -> String {
        format!("/ip4/127.0.0.1/tcp/{}/http", self.port)
    }
}

impl Drop for FakeNode {
    fn drop(&mut self) {
        let _ = self.handle.stop();
    }
}
