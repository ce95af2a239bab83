// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{env, fmt, str::FromStr, time::Duration};

use anyhow::Context as _;
use http::{HeaderMap, HeaderValue, header};
use jsonrpsee::core::{ClientError, client::ClientT as _};
use multiaddr::{Multiaddr, Protocol};
use tracing::debug;
use url::Url;

use super::Request;
use crate::lotus_json::HasLotusJson;

pub const API_INFO_KEY: &str = "FULLNODE_API_INFO";
pub const DEFAULT_MULTIADDR: &str = "/ip4/127.0.0.1/tcp/2345/http";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const RPC_PATH: &str = "/rpc/v1";

/// Token and URL of a full node, as found in `FULLNODE_API_INFO`.
///
/// The format is `[token:]multiaddr`, e.g.
/// `eyJhbGciOi...:/ip4/127.0.0.1/tcp/1234/http`.
#[derive(Clone, Debug)]
pub struct ApiInfo {
    multiaddr: Multiaddr,
    url: Url,
    pub token: Option<String>,
}

impl fmt::Display for ApiInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = &self.token {
            token.fmt(f)?;
            write!(f, ":")?;
        }
        self.multiaddr.fmt(f)
    }
}

impl FromStr for ApiInfo {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // a bare multiaddr may itself contain colons, e.g. `/ip6/::1/...`
        let (token, host) = match s.split_once(':') {
            Some((token, host)) if !s.starts_with('/') => (Some(token), host),
            _ => (None, s),
        };
        let multiaddr: Multiaddr = host
            .parse()
            .with_context(|| format!("invalid multiaddr `{host}`"))?;
        let url = multiaddr2url(&multiaddr).context("couldn't convert multiaddr to URL")?;
        Ok(ApiInfo {
            multiaddr,
            url,
            token: token.map(String::from),
        })
    }
}

impl ApiInfo {
    /// Read [`API_INFO_KEY`] from the environment, falling back to [`DEFAULT_MULTIADDR`].
    /// Fails if the variable is set but malformed.
    pub fn from_env() -> anyhow::Result<Self> {
        match env::var(API_INFO_KEY) {
            Ok(it) => it
                .parse()
                .with_context(|| format!("couldn't parse {API_INFO_KEY}")),
            Err(env::VarError::NotPresent) => DEFAULT_MULTIADDR.parse(),
            Err(it @ env::VarError::NotUnicode(_)) => Err(it.into()),
        }
    }

    /// A token given on the command line takes precedence.
    pub fn set_token(self, token: Option<String>) -> Self {
        ApiInfo {
            token: token.or(self.token),
            ..self
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// A JSON-RPC connection to a full node.
pub struct Client {
    url: Url,
    inner: ClientInner,
}

enum ClientInner {
    Ws(jsonrpsee::ws_client::WsClient),
    Http(jsonrpsee::http_client::HttpClient),
}

impl Client {
    pub async fn connect(api_info: &ApiInfo, timeout: Duration) -> Result<Self, ClientError> {
        let mut url = api_info.url().clone();
        url.set_path(RPC_PATH);
        let headers = match &api_info.token {
            Some(token) => HeaderMap::from_iter([(
                header::AUTHORIZATION,
                HeaderValue::try_from(format!("Bearer {token}")).map_err(|e| {
                    ClientError::Custom(format!("Invalid authorization token: {e}"))
                })?,
            )]),
            None => HeaderMap::new(),
        };
        let inner = match url.scheme() {
            "ws" | "wss" => ClientInner::Ws(
                jsonrpsee::ws_client::WsClientBuilder::new()
                    .set_headers(headers)
                    .request_timeout(timeout)
                    .build(url.as_str())
                    .await?,
            ),
            "http" | "https" => ClientInner::Http(
                jsonrpsee::http_client::HttpClientBuilder::new()
                    .set_headers(headers)
                    .request_timeout(timeout)
                    .build(url.as_str())?,
            ),
            it => return Err(ClientError::Custom(format!("Unsupported URL scheme: {it}"))),
        };
        Ok(Self { url, inner })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn call<T: HasLotusJson + Send>(
        &self,
        request: Request<T>,
    ) -> Result<T, ClientError> {
        let method_name = request.method_name;
        debug!("calling {method_name}");
        let result: T::LotusJson = match &self.inner {
            ClientInner::Ws(it) => it.request(method_name, request).await,
            ClientInner::Http(it) => it.request(method_name, request).await,
        }?;
        Ok(T::from_lotus_json(result))
    }
}

/// `"/dns/example.com/tcp/8080/http" -> "http://example.com:8080/"`
///
/// Returns [`None`] on unsupported formats, or if there is a URL parsing error.
///
/// Note that [`Multiaddr`]s do NOT support a (URL) `path`, so that must be handled
/// out-of-band.
fn multiaddr2url(m: &Multiaddr) -> Option<Url> {
    let mut components = m.iter().peekable();
    let host = match components.next()? {
        Protocol::Dns(it) | Protocol::Dns4(it) | Protocol::Dns6(it) | Protocol::Dnsaddr(it) => {
            it.to_string()
        }
        Protocol::Ip4(it) => it.to_string(),
        Protocol::Ip6(it) => format!("[{it}]"),
        _ => return None,
    };
    let port = match components.next_if(|it| matches!(it, Protocol::Tcp(_))) {
        Some(Protocol::Tcp(port)) => Some(port),
        _ => None,
    };
    let scheme = match components.next()? {
        Protocol::Http => "http",
        Protocol::Https => "https",
        Protocol::Ws(it) if it == "/" => "ws",
        Protocol::Wss(it) if it == "/" => "wss",
        _ => return None,
    };
    let None = components.next() else { return None };
    let parse_me = match port {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    };
    parse_me.parse().ok()
}
