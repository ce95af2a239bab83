// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{future::Future, marker::PhantomData};

use jsonrpsee::core::ClientError;

use super::Client;
use crate::lotus_json::HasLotusJson;

/// A remote procedure, described by its name and its lotus JSON signature.
///
/// Parameters are positional: `Params` is a tuple of `ARITY` elements.
pub trait RpcMethod<const ARITY: usize> {
    /// Method name, e.g. `Filecoin.ChainHead`.
    const NAME: &'static str;
    /// Name of each parameter, used in error messages.
    const PARAM_NAMES: [&'static str; ARITY];
    type Params: HasLotusJson;
    type Ok: HasLotusJson;
}

/// Calling convention for every [`RpcMethod`].
pub trait RpcMethodExt<const ARITY: usize>: RpcMethod<ARITY> {
    /// Describe a call without making it.
    fn request(params: Self::Params) -> Result<Request<Self::Ok>, serde_json::Error> {
        let params = match params.into_lotus_json_value()? {
            // `()` means no parameters
            serde_json::Value::Null => serde_json::Value::Array(vec![]),
            other => other,
        };
        debug_assert!(
            params.as_array().is_some_and(|it| it.len() == ARITY),
            "{} takes {ARITY} positional params {:?}",
            Self::NAME,
            Self::PARAM_NAMES,
        );
        Ok(Request {
            method_name: Self::NAME,
            params,
            result_type: PhantomData,
        })
    }

    /// Call the method on the node behind `client`.
    fn call(
        client: &Client,
        params: Self::Params,
    ) -> impl Future<Output = Result<Self::Ok, ClientError>> + Send
    where
        Self::Ok: Send,
    {
        let request = Self::request(params).map_err(|e| ClientError::Custom(e.to_string()));
        async move { client.call(request?).await }
    }
}

impl<const ARITY: usize, T> RpcMethodExt<ARITY> for T where T: RpcMethod<ARITY> {}

/// An at-rest description of a remote procedure call, see [`Client::call`].
#[derive(Debug, Clone)]
pub struct Request<T = serde_json::Value> {
    pub method_name: &'static str,
    pub params: serde_json::Value,
    pub result_type: PhantomData<T>,
}

impl<T> jsonrpsee::core::traits::ToRpcParams for Request<T> {
    fn to_rpc_params(
        self,
    ) -> Result<Option<Box<serde_json::value::RawValue>>, serde_json::Error> {
        Ok(Some(serde_json::value::to_raw_value(&self.params)?))
    }
}
