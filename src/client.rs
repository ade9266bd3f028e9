//! High-level client — `AlchemyClient` with borrowed sub-client accessors.
//!
//! The builder resolves configuration once: API key from the explicit
//! argument or the environment, network from a selector string. The derived
//! base URLs change only through [`AlchemyClient::set_network`].

use crate::domain::nft::client::Nft;
use crate::domain::node::client::Node;
use crate::domain::token::client::Tokens;
use crate::domain::transfers::client::Transfers;
use crate::error::{SdkError, SdkResult};
use crate::http::AlchemyHttp;
use crate::network::Network;

use serde_json::Value;
use std::time::Duration;

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "ALCHEMY_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the SDK.
///
/// Sub-client accessors group the endpoint families:
/// `client.node()`, `client.transfers()`, `client.tokens()`, `client.nft()`.
#[derive(Debug)]
pub struct AlchemyClient {
    pub(crate) http: AlchemyHttp,
    api_key: String,
    network: Network,
}

impl AlchemyClient {
    pub fn builder() -> AlchemyClientBuilder {
        AlchemyClientBuilder::default()
    }

    /// The network requests currently target.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The configured API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// JSON-RPC base URL in use.
    pub fn rpc_url(&self) -> &str {
        self.http.rpc_url()
    }

    /// Switch networks; both endpoint URLs are re-derived in one step so
    /// network and base URL never disagree.
    pub fn set_network(&mut self, selector: &str) -> SdkResult<()> {
        let network = Network::resolve(selector)
            .ok_or_else(|| SdkError::UnsupportedNetwork(selector.to_string()))?;
        self.network = network;
        self.http.set_urls(
            network.rpc_url(&self.api_key),
            network.nft_url(&self.api_key),
        );
        Ok(())
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn node(&self) -> Node<'_> {
        Node { client: self }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn nft(&self) -> Nft<'_> {
        Nft { client: self }
    }

    /// Raw escape hatch: send any RPC method with the given params and
    /// return the unwrapped `result`.
    pub fn send(&self, method: &str, params: Value) -> SdkResult<Value> {
        let params = if params.is_array() {
            params
        } else {
            Value::Array(vec![params])
        };
        Ok(self.http.rpc(method, params)?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AlchemyClientBuilder {
    api_key: Option<String>,
    network: Option<String>,
    url: Option<String>,
    timeout: Duration,
}

impl Default for AlchemyClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            network: None,
            url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AlchemyClientBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Network selector: symbolic name, decimal chain ID, or hex chain ID.
    pub fn network(mut self, selector: impl Into<String>) -> Self {
        self.network = Some(selector.into());
        self
    }

    /// Explicit base-URL override (tests, proxies). Applies to both the
    /// JSON-RPC and NFT endpoint families and is replaced by the derived
    /// URLs on the next `set_network`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> SdkResult<AlchemyClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
            .ok_or(SdkError::Config)?;

        let network = match &self.network {
            Some(selector) => Network::resolve(selector)
                .ok_or_else(|| SdkError::UnsupportedNetwork(selector.clone()))?,
            None => Network::default(),
        };

        let (rpc_url, nft_url) = match self.url {
            Some(url) => (url.clone(), url),
            None => (network.rpc_url(&api_key), network.nft_url(&api_key)),
        };

        Ok(AlchemyClient {
            http: AlchemyHttp::new(rpc_url, nft_url, self.timeout),
            api_key,
            network,
        })
    }
}
